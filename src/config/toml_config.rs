use crate::core::report::OutputFormat;
use crate::domain::{Extras, Inputs, PricingSnapshot, PricingSource, Variables};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pricing file layout. Every table and key is optional; missing values fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub inputs: Option<InputsConfig>,
    pub variables: Option<VariablesConfig>,
    pub extras: Option<ExtrasConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub hours_per_week: Option<f64>,
    pub weeks_per_year: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub annual_income_goal: Option<f64>,
    pub hours_for_project: Option<f64>,
    pub project_expenses: Option<f64>,
    pub number_of_assets: Option<f64>,
    pub project_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariablesConfig {
    pub client_pps: Option<f64>,
    pub client_sales: Option<f64>,
    pub client_license: Option<f64>,
    pub delivery_speed: Option<f64>,
    pub delivery_risk: Option<f64>,
    pub delivery_quality: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtrasConfig {
    pub number_of_posts: Option<f64>,
    pub price_per_post: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
    pub output_path: Option<String>,
    pub skip_validation: Option<bool>,
}

fn overlay(target: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl InputsConfig {
    pub fn apply(&self, inputs: &mut Inputs) {
        overlay(&mut inputs.hours_per_week, self.hours_per_week);
        overlay(&mut inputs.weeks_per_year, self.weeks_per_year);
        overlay(&mut inputs.hourly_rate, self.hourly_rate);
        overlay(&mut inputs.annual_income_goal, self.annual_income_goal);
        overlay(&mut inputs.hours_for_project, self.hours_for_project);
        overlay(&mut inputs.project_expenses, self.project_expenses);
        overlay(&mut inputs.number_of_assets, self.number_of_assets);
        overlay(&mut inputs.project_price, self.project_price);
    }
}

impl VariablesConfig {
    pub fn apply(&self, variables: &mut Variables) {
        overlay(&mut variables.client_pps, self.client_pps);
        overlay(&mut variables.client_sales, self.client_sales);
        overlay(&mut variables.client_license, self.client_license);
        overlay(&mut variables.delivery_speed, self.delivery_speed);
        overlay(&mut variables.delivery_risk, self.delivery_risk);
        overlay(&mut variables.delivery_quality, self.delivery_quality);
    }
}

impl ExtrasConfig {
    pub fn apply(&self, extras: &mut Extras) {
        overlay(&mut extras.number_of_posts, self.number_of_posts);
        overlay(&mut extras.price_per_post, self.price_per_post);
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| PricingError::ConfigReadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PricingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PricingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays this file onto `snapshot`.
    pub fn apply_to(&self, snapshot: &mut PricingSnapshot) {
        if let Some(inputs) = &self.inputs {
            inputs.apply(&mut snapshot.inputs);
        }
        if let Some(variables) = &self.variables {
            variables.apply(&mut snapshot.variables);
        }
        if let Some(extras) = &self.extras {
            extras.apply(&mut snapshot.extras);
        }
    }

    pub fn resolved_snapshot(&self) -> PricingSnapshot {
        let mut snapshot = PricingSnapshot::default();
        self.apply_to(&mut snapshot);
        snapshot
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|r| r.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.output_path.as_deref())
    }

    pub fn skip_validation(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|r| r.skip_validation)
            .unwrap_or(false)
    }

    /// Only checks that values are usable numbers; pricing rules belong to the calculator.
    pub fn validate_config(&self) -> Result<()> {
        for (field, value) in snapshot_fields(&self.resolved_snapshot()) {
            validate_finite(field, value)?;
        }

        if let Some(path) = self.output_path() {
            validate_non_empty_string("report.output_path", path)?;
        }

        Ok(())
    }
}

/// Every numeric field of a snapshot with its config-file name.
pub fn snapshot_fields(snapshot: &PricingSnapshot) -> [(&'static str, f64); 16] {
    let i = &snapshot.inputs;
    let v = &snapshot.variables;
    let e = &snapshot.extras;
    [
        ("inputs.hours_per_week", i.hours_per_week),
        ("inputs.weeks_per_year", i.weeks_per_year),
        ("inputs.hourly_rate", i.hourly_rate),
        ("inputs.annual_income_goal", i.annual_income_goal),
        ("inputs.hours_for_project", i.hours_for_project),
        ("inputs.project_expenses", i.project_expenses),
        ("inputs.number_of_assets", i.number_of_assets),
        ("inputs.project_price", i.project_price),
        ("variables.client_pps", v.client_pps),
        ("variables.client_sales", v.client_sales),
        ("variables.client_license", v.client_license),
        ("variables.delivery_speed", v.delivery_speed),
        ("variables.delivery_risk", v.delivery_risk),
        ("variables.delivery_quality", v.delivery_quality),
        ("extras.number_of_posts", e.number_of_posts),
        ("extras.price_per_post", e.price_per_post),
    ]
}

impl PricingSource for TomlConfig {
    fn inputs(&self) -> Inputs {
        self.resolved_snapshot().inputs
    }

    fn variables(&self) -> Variables {
        self.resolved_snapshot().variables
    }

    fn extras(&self) -> Extras {
        self.resolved_snapshot().extras
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[inputs]
hours_per_week = 30
annual_income_goal = 150000.0

[variables]
client_license = 1.0

[report]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let snapshot = config.resolved_snapshot();

        assert_eq!(snapshot.inputs.hours_per_week, 30.0);
        assert_eq!(snapshot.inputs.annual_income_goal, 150_000.0);
        assert_eq!(snapshot.inputs.weeks_per_year, 42.0);
        assert_eq!(snapshot.variables.client_license, 1.0);
        assert_eq!(snapshot.variables.client_pps, 0.2);
        assert_eq!(snapshot.extras, Extras::default());
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(!config.skip_validation());
    }

    #[test]
    fn test_empty_config_is_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.resolved_snapshot(), PricingSnapshot::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRICER_TEST_INCOME_GOAL", "90000");

        let toml_content = r#"
[inputs]
annual_income_goal = ${PRICER_TEST_INCOME_GOAL}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inputs().annual_income_goal, 90_000.0);

        std::env::remove_var("PRICER_TEST_INCOME_GOAL");
    }

    #[test]
    fn test_unset_env_var_fails_to_parse() {
        let toml_content = r#"
[inputs]
annual_income_goal = ${PRICER_TEST_DEFINITELY_UNSET}
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, PricingError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let toml_content = r#"
[variables]
delivery_risk = nan
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        match err {
            PricingError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "variables.delivery_risk")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_variables_pass_config_validation() {
        let toml_content = r#"
[variables]
client_sales = -0.5

[extras]
price_per_post = -10
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.variables().client_sales, -0.5);
        assert_eq!(config.extras().price_per_post, -10.0);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[inputs]
number_of_assets = 4

[report]
output_path = "./quote.csv"
format = "csv"
skip_validation = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.inputs().number_of_assets, 4.0);
        assert_eq!(config.output_path(), Some("./quote.csv"));
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert!(config.skip_validation());
    }

    #[test]
    fn test_missing_file_is_config_read_error() {
        let err = TomlConfig::from_file("/nonexistent/pricing.toml").unwrap_err();
        assert!(matches!(err, PricingError::ConfigReadError { .. }));
        assert!(err.to_string().contains("/nonexistent/pricing.toml"));
        assert_eq!(err.exit_code(), 1);
    }
}
