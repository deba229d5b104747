//! Machine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bet::BetLimits;
use crate::error::ConfigError;
use crate::grid::GridSpec;
use crate::symbols::SymbolTable;

/// Everything needed to build a [`crate::SlotMachine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Grid layout
    #[serde(default)]
    pub grid: GridSpec,
    /// Symbol weights and values
    #[serde(default)]
    pub symbols: SymbolTable,
    /// Bet limits
    #[serde(default)]
    pub limits: BetLimits,
}

impl MachineConfig {
    /// Classic 3×3, five symbols, $100–$1000 per line
    pub fn classic() -> Self {
        Self {
            grid: GridSpec::classic_3x3(),
            symbols: SymbolTable::classic(),
            limits: BetLimits::classic(),
        }
    }

    /// Check every startup invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.check_capacity(self.symbols.total_weight())?;
        self.limits.validate()
    }

    /// Parse and validate JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let config = match ext.as_str() {
            "json" => Self::from_json_str(&text)?,
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        log::info!("Loaded machine config from {}", path.display());
        Ok(config)
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;
    use crate::symbols::Symbol;
    use std::io::Write;

    #[test]
    fn test_classic_is_valid() {
        let config = MachineConfig::classic();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.max_lines(), 3);
        assert_eq!(config.limits.min_bet, Money::from(100));
    }

    #[test]
    fn test_json_export_import() {
        let config = MachineConfig::classic();
        let json = config.to_json().unwrap();
        let loaded = MachineConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "grid": { "reels": 2, "rows": 2 } }"#;
        let config = MachineConfig::from_json_str(json).unwrap();
        assert_eq!(config.grid, GridSpec::new(2, 2));
        assert_eq!(config.symbols, SymbolTable::classic());
    }

    #[test]
    fn test_yaml_config() {
        let yaml = r#"
grid:
  reels: 3
  rows: 1
symbols:
  weights:
    X: 2
    Z: 1
  values:
    X: 3
    Z: 10
limits:
  min_bet: "1"
  max_bet: "50"
"#;
        let config = MachineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.symbols.value(Symbol::new('Z')), Some(10));
        assert_eq!(config.limits.max_bet, Money::from(50));
    }

    #[test]
    fn test_oversized_grid_fails_validation() {
        let json = r#"{ "grid": { "reels": 10, "rows": 10 } }"#;
        let err = MachineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::GridTooLarge { .. }));
    }

    #[test]
    fn test_overflowing_grid_fails_validation() {
        let json = r#"{ "grid": { "reels": 9223372036854775808, "rows": 2 } }"#;
        let err = MachineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GridTooLarge {
                required: usize::MAX,
                available: 10
            }
        ));
    }

    #[test]
    fn test_mismatched_symbols_fail() {
        let json = r#"{ "symbols": { "weights": { "A": 9 }, "values": { "B": 1 } } }"#;
        assert!(matches!(
            MachineConfig::from_json_str(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", MachineConfig::classic().to_json().unwrap()).unwrap();

        let config = MachineConfig::load(file.path()).unwrap();
        assert_eq!(config, MachineConfig::classic());
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            MachineConfig::load(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
