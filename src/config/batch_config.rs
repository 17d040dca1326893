use crate::core::{FormFields, Objective};
use crate::utils::error::{OptimiserError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    #[serde(default)]
    pub lots: Vec<LotDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
    pub default_objective: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotDefinition {
    pub name: String,
    pub area: RawValue,
    pub aisle_width: RawValue,
    pub aisle_length: RawValue,
    pub objective: Option<String>,
    pub enabled: Option<bool>,
}

/// A numeric field as written in the file. Kept as text so it goes through the input validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl LotDefinition {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入批次設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SITE_AREA})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OptimiserError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn enabled_lots(&self) -> impl Iterator<Item = &LotDefinition> {
        self.lots.iter().filter(|lot| lot.is_enabled())
    }

    pub fn objective_for<'a>(&'a self, lot: &'a LotDefinition) -> Option<&'a str> {
        lot.objective
            .as_deref()
            .or(self.batch.default_objective.as_deref())
    }

    /// Raw form fields for a lot, with the batch default objective applied.
    pub fn resolve(&self, lot: &LotDefinition) -> FormFields {
        FormFields::new(
            lot.area.to_string(),
            lot.aisle_width.to_string(),
            lot.aisle_length.to_string(),
            self.objective_for(lot).unwrap_or_default(),
        )
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        if let Some(default) = &self.batch.default_objective {
            if Objective::from_selection(default).is_none() {
                return Err(OptimiserError::ConfigError {
                    message: format!("batch.default_objective '{}' is not a known objective", default),
                });
            }
        }

        if self.lots.is_empty() {
            return Err(OptimiserError::ConfigError {
                message: "at least one [[lots]] entry is required".to_string(),
            });
        }

        for lot in &self.lots {
            validate_non_empty_string("lots.name", &lot.name)?;
            if self.objective_for(lot).is_none() {
                return Err(OptimiserError::ConfigError {
                    message: format!(
                        "lot '{}' has no objective and batch.default_objective is not set",
                        lot.name
                    ),
                });
            }
        }

        validate_unique_names("lots.name", self.lots.iter().map(|lot| lot.name.as_str()))
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
