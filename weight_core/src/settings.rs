//! # Calculator Settings
//!
//! Runtime configuration, stored as JSON. Missing keys take their defaults,
//! and out-of-range values are replaced by the default with a warning
//! rather than rejected.
//!
//! ## Example
//!
//! ```rust,no_run
//! use weight_core::settings::{load_settings, save_settings, CalculatorSettings};
//! use std::path::Path;
//!
//! let path = Path::new("calculator.json");
//! save_settings(&CalculatorSettings::default(), path)?;
//!
//! let settings = load_settings(path)?;
//! assert_eq!(settings.debounce_ms, 180);
//! # Ok::<(), weight_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculations::DEFAULT_DENSITY_G_CM3;
use crate::errors::{CalcError, CalcResult};
use crate::units::DensityUnit;

/// Default quiescence window before a recompute (ms)
pub const DEFAULT_DEBOUNCE_MS: u64 = 180;

/// Longest accepted quiescence window (ms)
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Calculator settings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "debounce_ms": 180,
///   "fallback_density_g_cm3": 7.85,
///   "default_density_unit": "kg/m3"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Quiet period after the last input change before recomputing
    pub debounce_ms: u64,

    /// Density used when the density field is unset (g/cm³)
    pub fallback_density_g_cm3: f64,

    /// Unit the density field is entered in for new profiles
    pub default_density_unit: DensityUnit,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            fallback_density_g_cm3: DEFAULT_DENSITY_G_CM3,
            default_density_unit: DensityUnit::default(),
        }
    }
}

impl CalculatorSettings {
    /// Debounce window as a [`Duration`]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Replace out-of-range values with their defaults
    pub fn validated(mut self) -> Self {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            warn!(
                debounce_ms = self.debounce_ms,
                max = MAX_DEBOUNCE_MS,
                "debounce window out of range, using default"
            );
            self.debounce_ms = DEFAULT_DEBOUNCE_MS;
        }

        let density = self.fallback_density_g_cm3;
        if !density.is_finite() || density <= 0.0 {
            warn!(density, "fallback density must be positive, using default");
            self.fallback_density_g_cm3 = DEFAULT_DENSITY_G_CM3;
        }

        self
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - Loaded and range-checked settings
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: CalculatorSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    info!(path = %path.display(), "loaded calculator settings");
    Ok(settings.validated())
}

/// Save settings as pretty-printed JSON.
///
/// Writes to a temporary file and renames it over the target.
pub fn save_settings(settings: &CalculatorSettings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings)?;
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("weight_core_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.debounce_ms, 180);
        assert_eq!(settings.debounce(), Duration::from_millis(180));
        assert_eq!(settings.fallback_density_g_cm3, 7.85);
        assert_eq!(settings.default_density_unit, DensityUnit::KgPerM3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: CalculatorSettings = serde_json::from_str(r#"{"debounce_ms": 250}"#).unwrap();
        assert_eq!(settings.debounce_ms, 250);
        assert_eq!(settings.fallback_density_g_cm3, 7.85);
    }

    #[test]
    fn test_out_of_range_replaced() {
        let settings = CalculatorSettings {
            debounce_ms: 60_000,
            fallback_density_g_cm3: -1.0,
            default_density_unit: DensityUnit::GramPerCm3,
        }
        .validated();
        assert_eq!(settings.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(settings.fallback_density_g_cm3, DEFAULT_DENSITY_G_CM3);
        assert_eq!(settings.default_density_unit, DensityUnit::GramPerCm3);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = CalculatorSettings {
            debounce_ms: 300,
            fallback_density_g_cm3: 2.7,
            default_density_unit: DensityUnit::LbPerFt3,
        };

        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_path("missing")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
