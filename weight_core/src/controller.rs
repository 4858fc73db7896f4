//! # Reactive Calculation Controller
//!
//! Owns the input state of one calculator screen (selected profile,
//! dimensions, quantity, price) and recomputes after input goes quiet.
//!
//! ## States
//!
//! ```text
//! Idle ──(complete input)──▶ Pending ──(debounce elapsed)──▶ Settled
//!  ▲                            │  ▲                            │
//!  └──(incomplete / qty 0)──────┘  └──────(any input change)────┘
//! ```
//!
//! - **Idle**: no profile, zero quantity, or a required field is empty
//! - **Pending**: inputs complete, debounce timer armed
//! - **Settled**: engine result published
//!
//! Every input change cancels the armed timer before anything else happens,
//! so the most recent input always wins. Selecting a different profile
//! discards the whole dimension set.
//!
//! The timer is a tokio task; mutating methods of a debounced controller
//! must be called from within a tokio runtime. Outside one they log a
//! warning and settle immediately. [`CalculationController::immediate`]
//! builds a controller that always settles synchronously, for callers
//! without a runtime.
//!
//! ## Example
//!
//! ```rust,no_run
//! use weight_core::controller::{CalculationController, ControllerState};
//! use weight_core::dimensions::DimKey;
//! use weight_core::settings::CalculatorSettings;
//!
//! # async fn run() {
//! let mut controller = CalculationController::new(CalculatorSettings::default());
//! let mut updates = controller.subscribe();
//!
//! controller.select_profile("round_bar");
//! controller.set_dimension(DimKey::Tw, "50");
//! controller.set_dimension(DimKey::H, "2");
//!
//! while updates.changed().await.is_ok() {
//!     if let ControllerState::Settled(result) = &*updates.borrow() {
//!         println!("{} kg", result.total_weight);
//!         break;
//!     }
//! }
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::calculations::{compute, CalculationResult};
use crate::dimensions::{CalcMode, DimKey, DimensionSet, Dimensions};
use crate::errors::CalcResult;
use crate::fields::{self, FieldSpec};
use crate::formula::FormulaId;
use crate::materials;
use crate::settings::CalculatorSettings;
use crate::units::{DensityUnit, GramPerCm3, KgPerM3, LengthUnit};

/// Observable controller state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "result", rename_all = "lowercase")]
pub enum ControllerState {
    /// Nothing to compute
    #[default]
    Idle,
    /// Inputs complete, waiting for the debounce window
    Pending,
    /// Latest computed result
    Settled(CalculationResult),
}

impl ControllerState {
    /// The published result, if settled
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            ControllerState::Settled(result) => Some(result),
            _ => None,
        }
    }
}

/// Selected profile id and the family it resolved to
#[derive(Debug, Clone, PartialEq)]
struct Selection {
    id: String,
    formula: Option<FormulaId>,
}

/// Everything the engine needs, captured when the timer is armed
#[derive(Debug, Clone)]
struct Snapshot {
    formula: Option<FormulaId>,
    dimensions: Dimensions,
    density_g_cm3: f64,
    quantity: u32,
    price_per_kg: Option<f64>,
}

impl Snapshot {
    fn compute(&self) -> CalculationResult {
        compute(
            self.formula,
            &self.dimensions,
            self.density_g_cm3,
            self.quantity,
            self.price_per_kg,
        )
    }
}

/// Debounced recompute driver for one calculator screen.
pub struct CalculationController {
    settings: CalculatorSettings,
    selection: Option<Selection>,
    dims: DimensionSet,
    quantity: u32,
    price_per_kg: Option<f64>,
    state: Arc<watch::Sender<ControllerState>>,
    /// Bumped on every re-arm and on teardown; a timer only publishes if
    /// its generation is still current
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
    /// `false` settles on every input change without a timer
    debounced: bool,
}

impl CalculationController {
    /// Create a controller with no profile selected and a quantity of 1
    pub fn new(settings: CalculatorSettings) -> Self {
        let settings = settings.validated();
        let (state, _) = watch::channel(ControllerState::Idle);
        let dims = Self::fresh_dimensions(&settings);

        CalculationController {
            settings,
            selection: None,
            dims,
            quantity: 1,
            price_per_kg: None,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
            debounced: true,
        }
    }

    /// Create a controller that settles synchronously on every input change
    pub fn immediate(settings: CalculatorSettings) -> Self {
        let mut controller = Self::new(settings);
        controller.debounced = false;
        controller
    }

    fn fresh_dimensions(settings: &CalculatorSettings) -> DimensionSet {
        let mut dims = DimensionSet::new();
        dims.density_unit = settings.default_density_unit;
        dims
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    /// Current state
    pub fn state(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    /// Current result (`None` unless settled)
    pub fn result(&self) -> Option<CalculationResult> {
        self.state.borrow().result().cloned()
    }

    /// Selected profile id, as given
    pub fn profile_id(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.id.as_str())
    }

    /// Family of the selected profile (`None` if none selected or unrecognized)
    pub fn formula(&self) -> Option<FormulaId> {
        self.selection.as_ref().and_then(|s| s.formula)
    }

    /// Raw input for the selected profile
    pub fn dimensions(&self) -> &DimensionSet {
        &self.dims
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_per_kg(&self) -> Option<f64> {
        self.price_per_kg
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Fields required by the selected profile in its current mode
    pub fn required_fields(&self) -> Vec<FieldSpec> {
        if self.selection.is_none() {
            return Vec::new();
        }
        fields::resolve(self.formula(), &self.dims)
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<FieldSpec> {
        if self.selection.is_none() {
            return Vec::new();
        }
        fields::missing_fields(self.formula(), &self.dims)
    }

    /// Whether every required field holds text
    pub fn has_all_required_inputs(&self) -> bool {
        self.selection.is_some() && fields::has_all_required_inputs(self.formula(), &self.dims)
    }

    /// Unit in effect for a key
    pub fn unit_for_key(&self, key: DimKey) -> LengthUnit {
        self.dims.unit_for_key(self.formula(), key)
    }

    /// Whether the field for `key` gets a unit selector
    pub fn should_show_unit_for_key(&self, key: DimKey) -> bool {
        fields::should_show_unit_for_key(self.formula(), key, self.dims.calc_mode)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Select a profile by id.
    ///
    /// A different id discards every dimension entered so far. Unrecognized
    /// ids are accepted and use the generic field set.
    pub fn select_profile(&mut self, id: &str) {
        if self.profile_id() == Some(id) {
            return;
        }

        let formula = FormulaId::parse_lenient(id);
        debug!(profile = id, ?formula, "profile selected");
        self.selection = Some(Selection {
            id: id.to_string(),
            formula,
        });
        self.dims = Self::fresh_dimensions(&self.settings);
        self.rearm();
    }

    /// Deselect the profile and discard its dimensions
    pub fn clear_profile(&mut self) {
        debug!("profile cleared");
        self.selection = None;
        self.dims = Self::fresh_dimensions(&self.settings);
        self.rearm();
    }

    /// Store raw text for a dimension (empty text clears it)
    pub fn set_dimension(&mut self, key: DimKey, raw: &str) {
        self.dims.set(key, raw);
        trace!(key = %key, value = ?self.dims.get(key), "dimension changed");
        self.rearm();
    }

    /// Select the length unit for a dimension
    pub fn set_unit(&mut self, key: DimKey, unit: LengthUnit) {
        trace!(key = %key, unit = %unit, "unit changed");
        self.dims.set_unit(key, unit);
        self.rearm();
    }

    pub fn set_calc_mode(&mut self, calc_mode: CalcMode) {
        trace!(mode = calc_mode.as_str(), "calc mode changed");
        self.dims.calc_mode = calc_mode;
        self.rearm();
    }

    pub fn set_include_radius(&mut self, include_radius: bool) {
        trace!(include_radius, "radius toggle changed");
        self.dims.include_radius = include_radius;
        self.rearm();
    }

    /// Store raw density text, in the current density unit
    pub fn set_density(&mut self, raw: &str) {
        self.dims.set_density(raw);
        trace!(density = ?self.dims.density(), "density changed");
        self.rearm();
    }

    /// Switch the density unit, converting an entered density to it
    pub fn set_density_unit(&mut self, unit: DensityUnit) {
        let current = self.dims.density_g_cm3();
        self.dims.density_unit = unit;
        if let Some(g_cm3) = current {
            self.dims.set_density_kg_m3(KgPerM3::from(GramPerCm3(g_cm3)).value());
        }
        trace!(unit = %unit, "density unit changed");
        self.rearm();
    }

    /// Seed the density from the material catalog
    pub fn set_density_from_catalog(&mut self, material: &str) -> CalcResult<()> {
        let entry = materials::lookup(material)?;
        self.dims.set_density_kg_m3(entry.density_kg_m3);
        trace!(material = entry.label, "density set from catalog");
        self.rearm();
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        trace!(quantity, "quantity changed");
        self.quantity = quantity;
        self.rearm();
    }

    /// Set or clear the price per kilogram
    pub fn set_price(&mut self, price_per_kg: Option<f64>) {
        trace!(?price_per_kg, "price changed");
        self.price_per_kg = price_per_kg;
        self.rearm();
    }

    /// Cancel any armed timer and publish Idle. No result is published
    /// afterwards until the next input change.
    pub fn shutdown(&mut self) {
        self.cancel();
        self.publish_idle();
        debug!("controller shut down");
    }

    // ------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------

    /// Inputs for the engine, or `None` when the state must be Idle
    fn snapshot(&self) -> Option<Snapshot> {
        let selection = self.selection.as_ref()?;
        if self.quantity == 0 || !fields::has_all_required_inputs(selection.formula, &self.dims) {
            return None;
        }

        Some(Snapshot {
            formula: selection.formula,
            dimensions: self.dims.canonicalize(selection.formula),
            density_g_cm3: self
                .dims
                .density_g_cm3()
                .unwrap_or(self.settings.fallback_density_g_cm3),
            quantity: self.quantity,
            price_per_kg: self.price_per_kg,
        })
    }

    /// Invalidate the armed timer, returning the new generation
    fn cancel(&mut self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!(generation, "debounce timer cancelled");
        }
        generation
    }

    fn publish_idle(&self) {
        self.state.send_if_modified(|state| {
            let changed = *state != ControllerState::Idle;
            *state = ControllerState::Idle;
            changed
        });
    }

    /// Cancel the pending timer and re-evaluate from the current inputs
    fn rearm(&mut self) {
        let generation = self.cancel();

        let Some(snapshot) = self.snapshot() else {
            self.publish_idle();
            return;
        };

        if !self.debounced {
            self.state.send_replace(ControllerState::Settled(snapshot.compute()));
            return;
        }

        let Ok(handle) = Handle::try_current() else {
            warn!("debounced controller used outside a tokio runtime, settling immediately");
            self.state.send_replace(ControllerState::Settled(snapshot.compute()));
            return;
        };

        self.state.send_replace(ControllerState::Pending);

        let delay = self.settings.debounce();
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        debug!(generation, delay_ms = self.settings.debounce_ms, "debounce timer armed");

        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let result = snapshot.compute();
            state.send_if_modified(|state| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                debug!(generation, total_weight = %result.total_weight, "result settled");
                *state = ControllerState::Settled(result);
                true
            });
        }));
    }
}

impl Drop for CalculationController {
    fn drop(&mut self) {
        self.cancel();
    }
}
