use crate::core::factorial::{FactorialStrategy, MAX_FACTORIAL_INPUT};
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub factorial: FactorialConfig,
    pub output: OutputConfig,
    pub tour: TourConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorialConfig {
    pub max_input: i64,
    pub strategy: FactorialStrategy,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self {
            max_input: MAX_FACTORIAL_INPUT,
            strategy: FactorialStrategy::Iterative,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub factorial_input: i64,
    pub greet_name: String,
    pub echo_name: String,
    pub add: [i64; 2],
    pub sum: Vec<i64>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            factorial_input: 5,
            greet_name: "Jake Gyllenhaal".to_string(),
            echo_name: "Jay".to_string(),
            add: [1, 2],
            sum: vec![1, 2, 3, 4],
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GREET_NAME})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TourError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output.format = format;
    }

    pub fn set_strategy(&mut self, strategy: FactorialStrategy) {
        self.factorial.strategy = strategy;
    }
}

impl ConfigProvider for TomlConfig {
    fn max_factorial_input(&self) -> i64 {
        self.factorial.max_input
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn use_recursive_factorial(&self) -> bool {
        self.factorial.strategy == FactorialStrategy::Recursive
    }

    fn tour_factorial_input(&self) -> i64 {
        self.tour.factorial_input
    }

    fn tour_greet_name(&self) -> &str {
        &self.tour.greet_name
    }

    fn tour_echo_name(&self) -> &str {
        &self.tour.echo_name
    }

    fn tour_add_operands(&self) -> (i64, i64) {
        let [x, y] = self.tour.add;
        (x, y)
    }

    fn tour_sum_operands(&self) -> &[i64] {
        &self.tour.sum
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "factorial.max_input",
            self.factorial.max_input,
            0,
            MAX_FACTORIAL_INPUT,
        )?;
        validation::validate_non_empty_string("tour.greet_name", &self.tour.greet_name)?;
        validation::validate_non_empty_string("tour.echo_name", &self.tour.echo_name)?;

        Ok(())
    }
}
