#[cfg(feature = "cli")]
pub mod cli;
pub mod locale;

use crate::core::binary_prefix::DEFAULT_TICK_COUNT;
use crate::domain::model::{PortOrdering, PrefixSystem};
use crate::utils::error::{DisplayError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use locale::{Locale, LocalePreset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Settings shared by every rendering command, usually read from a TOML file:
///
/// ```toml
/// [locale]
/// preset = "german"
///
/// [ticks]
/// count = 8
///
/// [bytes]
/// prefix = "si"
///
/// [ports]
/// patch = true
/// column = "port"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: LocaleConfig,
    pub ticks: TickConfig,
    pub bytes: ByteConfig,
    pub ports: PortConfig,
}

/// A preset, optionally overridden by explicit fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub preset: LocalePreset,
    pub decimal: Option<String>,
    pub thousands: Option<String>,
    pub grouping: Option<Vec<usize>>,
    pub currency: Option<(String, String)>,
    pub days: Option<Vec<String>>,
    pub short_days: Option<Vec<String>>,
    pub months: Option<Vec<String>>,
    pub short_months: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    pub count: usize,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_TICK_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteConfig {
    pub prefix: PrefixSystem,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortConfig {
    pub patch: bool,
    /// Default column for table sorting.
    pub column: Option<String>,
}

impl PortConfig {
    pub fn ordering(&self) -> PortOrdering {
        if self.patch {
            PortOrdering::Patch
        } else {
            PortOrdering::Plain
        }
    }
}

impl LocaleConfig {
    pub fn resolve(&self) -> Locale {
        let mut locale = Locale::from_preset(self.preset);
        if let Some(decimal) = &self.decimal {
            locale.decimal = decimal.clone();
        }
        if let Some(thousands) = &self.thousands {
            locale.thousands = thousands.clone();
        }
        if let Some(grouping) = &self.grouping {
            locale.grouping = grouping.clone();
        }
        if let Some(currency) = &self.currency {
            locale.currency = currency.clone();
        }
        if let Some(days) = &self.days {
            locale.days = days.clone();
        }
        if let Some(short_days) = &self.short_days {
            locale.short_days = short_days.clone();
        }
        if let Some(months) = &self.months {
            locale.months = months.clone();
        }
        if let Some(short_months) = &self.short_months {
            locale.short_months = short_months.clone();
        }
        locale
    }
}

impl DisplayConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading display config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(DisplayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DisplayError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DISPLAY_LOCALE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn locale(&self) -> Locale {
        self.locale.resolve()
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("ticks.count", self.ticks.count, 1)?;
        self.locale().validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DisplayConfig::from_toml_str("").unwrap();
        assert_eq!(config.ticks.count, 10);
        assert_eq!(config.bytes.prefix, PrefixSystem::Binary);
        assert_eq!(config.ports.ordering(), PortOrdering::Plain);
        assert_eq!(config.locale(), Locale::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_with_override() {
        let config = DisplayConfig::from_toml_str(
            r#"
[locale]
preset = "german"
thousands = " "

[bytes]
prefix = "si"

[ports]
patch = true
"#,
        )
        .unwrap();

        let locale = config.locale();
        assert_eq!(locale.decimal, ",");
        assert_eq!(locale.thousands, " ");
        assert_eq!(config.bytes.prefix, PrefixSystem::Si);
        assert_eq!(config.ports.ordering(), PortOrdering::Patch);
    }

    #[test]
    fn test_zero_tick_count_is_rejected() {
        let config = DisplayConfig::from_toml_str("[ticks]\ncount = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DisplayError::InvalidConfigValueError { ref field, .. } if field == "ticks.count"));
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let processed =
            DisplayConfig::substitute_env_vars("column = \"${PYCROFT_DISPLAY_SURELY_UNSET}\"");
        assert_eq!(processed, "column = \"${PYCROFT_DISPLAY_SURELY_UNSET}\"");
    }

    #[test]
    fn test_env_var_is_substituted_on_every_call() {
        std::env::set_var("PYCROFT_DISPLAY_UNIT_COLUMN", "patch_port");
        for _ in 0..2 {
            let processed = DisplayConfig::substitute_env_vars(
                "column = \"${PYCROFT_DISPLAY_UNIT_COLUMN}\" # ${PYCROFT_DISPLAY_SURELY_UNSET}",
            );
            assert_eq!(processed, "column = \"patch_port\" # ${PYCROFT_DISPLAY_SURELY_UNSET}");
        }
    }

    #[test]
    fn test_invalid_toml() {
        let result = DisplayConfig::from_toml_str("[ticks\ncount = 3");
        assert!(matches!(result, Err(DisplayError::ConfigValidationError { .. })));
    }
}
