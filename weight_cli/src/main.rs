//! # Weight CLI
//!
//! Command-line front end for the metal stock weight engine.
//!
//! ```text
//! weight_cli calc round_bar --dim tw=50 --dim h=6m --qty 10 --price 1.2
//! weight_cli fields i_beam --include-radius
//! weight_cli materials --unit g/cm3
//! weight_cli formulas
//! ```
//!
//! Set `RUST_LOG=debug` for engine logging on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use weight_core::calculations::{compute_breakdown, CalculationResult, WeightBreakdown};
use weight_core::dimensions::{CalcMode, DimKey, DimensionSet};
use weight_core::errors::{CalcError, CalcResult};
use weight_core::fields::{self, FieldSpec};
use weight_core::formula::FormulaId;
use weight_core::materials;
use weight_core::settings::{load_settings, CalculatorSettings};
use weight_core::units::{format_density, DensityUnit, LengthUnit};

/// Exit code when required fields are missing
const EXIT_INCOMPLETE: u8 = 2;

/// Structural metal stock weight and cost calculator
#[derive(Parser, Debug)]
#[command(name = "weight_cli")]
#[command(about = "Structural metal stock weight and cost calculator", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the weight and price of a profile
    Calc(CalcArgs),

    /// List the fields a profile requires
    Fields {
        /// Profile id (e.g., round_tube)
        formula: String,

        #[command(flatten)]
        modes: ModeArgs,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the density catalog
    Materials {
        /// Density unit (kg/m3, lb/ft3, lb/yd3, g/cm3, g/m3)
        #[arg(short, long, default_value = "kg/m3")]
        unit: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List every profile id
    Formulas {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ModeArgs {
    /// Input style (weight, thickness, geometric)
    #[arg(short, long, default_value = "weight")]
    mode: String,

    /// Include I-beam fillet radii
    #[arg(long)]
    include_radius: bool,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Profile id (e.g., round_bar)
    formula: String,

    /// Dimension as key=value with an optional unit suffix (mm, m, ft, in)
    #[arg(short, long = "dim", value_name = "KEY=VALUE[UNIT]")]
    dims: Vec<String>,

    /// Number of pieces
    #[arg(short, long, default_value_t = 1)]
    qty: u32,

    /// Price per kilogram
    #[arg(short, long)]
    price: Option<f64>,

    /// Density, in --density-unit
    #[arg(long)]
    density: Option<String>,

    /// Unit of --density
    #[arg(long)]
    density_unit: Option<String>,

    /// Take the density from the catalog (e.g., "Stainless 304")
    #[arg(long, conflicts_with = "density")]
    material: Option<String>,

    #[command(flatten)]
    modes: ModeArgs,

    /// Print JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of `calc`
#[derive(Serialize)]
struct CalcOutput {
    formula: Option<FormulaId>,
    quantity: u32,
    density_g_cm3: f64,
    breakdown: WeightBreakdown,
    result: CalculationResult,
}

/// JSON output of `fields`
#[derive(Serialize)]
struct FieldOutput {
    #[serde(flatten)]
    field: FieldSpec,
    unit: Option<LengthUnit>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<ExitCode> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => CalculatorSettings::default(),
    };

    match cli.command {
        Command::Calc(args) => calc(args, &settings),
        Command::Fields { formula, modes, json } => {
            print_fields(&formula, &modes, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Materials { unit, json } => {
            print_materials(unit.parse()?, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Formulas { json } => {
            print_formulas(json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolve a profile id, falling back to the generic field set
fn resolve_formula(id: &str) -> Option<FormulaId> {
    let formula = FormulaId::parse_lenient(id);
    if formula.is_none() {
        warn!(formula = id, "unrecognized profile, using generic fields");
    }
    formula
}

/// Split `key=value[unit]` into its parts
fn parse_dim(arg: &str) -> CalcResult<(DimKey, String, Option<LengthUnit>)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| CalcError::invalid_input("dim", arg, "expected KEY=VALUE"))?;
    let key: DimKey = key.parse()?;

    // Longest symbols first so "mm" is not read as "m"
    let mut units = LengthUnit::ALL;
    units.sort_by_key(|u| std::cmp::Reverse(u.symbol().len()));

    for unit in units {
        if let Some(number) = value.trim().strip_suffix(unit.symbol()) {
            return Ok((key, number.to_string(), Some(unit)));
        }
    }
    Ok((key, value.to_string(), None))
}

fn calc(args: CalcArgs, settings: &CalculatorSettings) -> CalcResult<ExitCode> {
    let formula = resolve_formula(&args.formula);

    let mut dims = DimensionSet::new();
    dims.calc_mode = CalcMode::parse_lenient(&args.modes.mode);
    dims.include_radius = args.modes.include_radius;
    dims.density_unit = match &args.density_unit {
        Some(unit) => unit.parse()?,
        None => settings.default_density_unit,
    };

    for arg in &args.dims {
        let (key, value, unit) = parse_dim(arg)?;
        debug!(key = %key, value = %value, ?unit, "dimension");
        dims.set(key, &value);
        if let Some(unit) = unit {
            dims.set_unit(key, unit);
        }
    }

    if let Some(density) = &args.density {
        dims.set_density(density);
    } else if let Some(material) = &args.material {
        dims.set_density_kg_m3(materials::lookup(material)?.density_kg_m3);
    }

    let missing = fields::missing_fields(formula, &dims);
    if !missing.is_empty() {
        eprintln!("Missing required fields:");
        for field in &missing {
            eprintln!("  --dim {}=...   {} ({})", field.key, field.label, field.title);
        }
        return Ok(ExitCode::from(EXIT_INCOMPLETE));
    }

    if args.qty == 0 {
        return Err(CalcError::invalid_input("qty", "0", "Quantity must be at least 1"));
    }

    let density_g_cm3 = dims.density_g_cm3().unwrap_or(settings.fallback_density_g_cm3);
    let canonical = dims.canonicalize(formula);
    let breakdown = compute_breakdown(formula, &canonical, density_g_cm3, args.qty, args.price);
    let result = breakdown.to_result();

    if args.json {
        let output = CalcOutput {
            formula,
            quantity: args.qty,
            density_g_cm3,
            breakdown,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    let name = formula.map(|f| f.display_name()).unwrap_or("Unknown profile");
    println!("═══════════════════════════════════════");
    println!("  {} ({})", name, args.formula);
    println!("═══════════════════════════════════════");
    println!();
    println!("Density:      {:.3} g/cm³", density_g_cm3);
    if formula.is_some_and(|f| !f.is_volumetric()) {
        println!("Unit weight:  {} kg/m", result.unit_weight_per_meter);
    }
    println!("Piece weight: {} kg", result.piece_weight);
    println!("Total weight: {} kg ({} pcs)", result.total_weight, args.qty);
    if args.price.is_some() {
        println!("Total price:  {}", result.total_price);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_fields(id: &str, modes: &ModeArgs, json: bool) -> CalcResult<()> {
    let formula = resolve_formula(id);
    let calc_mode = CalcMode::parse_lenient(&modes.mode);
    let specs = fields::resolve_for_mode(formula, calc_mode, modes.include_radius);

    let rows: Vec<FieldOutput> = specs
        .into_iter()
        .map(|field| FieldOutput {
            unit: fields::should_show_unit_for_key(formula, field.key, calc_mode)
                .then(|| fields::default_unit_for_key(formula, field.key)),
            field,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let unit = row.unit.map(|u| u.symbol()).unwrap_or("-");
        println!("{:<3} {:<4} {:<3} {}", row.field.key.as_str(), row.field.label, unit, row.field.title);
    }
    Ok(())
}

fn print_materials(unit: DensityUnit, json: bool) -> CalcResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(materials::groups())?);
        return Ok(());
    }

    for group in materials::groups() {
        println!("{}", group.label);
        for material in group.materials {
            println!(
                "  {:<20} {:>10} {}",
                material.label,
                format_density(material.density_kg_m3, unit),
                unit.symbol()
            );
        }
    }
    Ok(())
}

fn print_formulas(json: bool) -> CalcResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&FormulaId::ALL)?);
        return Ok(());
    }

    for formula in FormulaId::ALL {
        println!("{:<18} {:<24} {}", formula.as_str(), formula.display_name(), formula.geometry());
    }
    Ok(())
}
