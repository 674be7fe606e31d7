pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::domain::PricingSnapshot;
use crate::utils::error::Result;
use crate::utils::validation::validate_finite;
#[cfg(feature = "cli")]
use clap::Parser;
use toml_config::snapshot_fields;
#[cfg(feature = "cli")]
use toml_config::{ExtrasConfig, InputsConfig, TomlConfig, VariablesConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "project-pricer")]
#[command(about = "Price a freelance project from an income goal, work schedule and risk factors")]
pub struct CliConfig {
    /// Path to a TOML pricing file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub hours_per_week: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub weeks_per_year: Option<f64>,

    /// Current hourly rate, for comparison only
    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub hourly_rate: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub annual_income_goal: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub hours_for_project: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub project_expenses: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub number_of_assets: Option<f64>,

    /// Price already quoted; 0 disables the comparison
    #[arg(long, allow_negative_numbers = true, help_heading = "Inputs")]
    pub project_price: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub client_pps: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub client_sales: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub client_license: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub delivery_speed: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub delivery_risk: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Variables")]
    pub delivery_quality: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Extras")]
    pub number_of_posts: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help_heading = "Extras")]
    pub price_per_post: Option<f64>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Calculate without checking the input rules first
    #[arg(long)]
    pub skip_validation: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Everything a single CLI run needs after defaults, file and flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub snapshot: PricingSnapshot,
    pub format: OutputFormat,
    pub output_path: Option<String>,
    pub skip_validation: bool,
}

impl ResolvedConfig {
    pub fn validate_values(&self) -> Result<()> {
        for (field, value) in snapshot_fields(&self.snapshot) {
            validate_finite(field, value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The explicit pricing flags as a config layer; unset flags stay `None`.
    fn flag_overrides(&self) -> TomlConfig {
        TomlConfig {
            inputs: Some(InputsConfig {
                hours_per_week: self.hours_per_week,
                weeks_per_year: self.weeks_per_year,
                hourly_rate: self.hourly_rate,
                annual_income_goal: self.annual_income_goal,
                hours_for_project: self.hours_for_project,
                project_expenses: self.project_expenses,
                number_of_assets: self.number_of_assets,
                project_price: self.project_price,
            }),
            variables: Some(VariablesConfig {
                client_pps: self.client_pps,
                client_sales: self.client_sales,
                client_license: self.client_license,
                delivery_speed: self.delivery_speed,
                delivery_risk: self.delivery_risk,
                delivery_quality: self.delivery_quality,
            }),
            extras: Some(ExtrasConfig {
                number_of_posts: self.number_of_posts,
                price_per_post: self.price_per_post,
            }),
            report: None,
        }
    }

    /// Merges defaults, then the TOML file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading pricing file: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate_config()?;
                Some(file)
            }
            None => None,
        };

        let mut snapshot = PricingSnapshot::default();
        if let Some(file) = &file {
            file.apply_to(&mut snapshot);
        }
        self.flag_overrides().apply_to(&mut snapshot);

        let resolved = ResolvedConfig {
            snapshot,
            format: self
                .format
                .or_else(|| file.as_ref().and_then(|f| f.output_format()))
                .unwrap_or_default(),
            output_path: self
                .output
                .clone()
                .or_else(|| file.as_ref().and_then(|f| f.output_path().map(str::to_string))),
            skip_validation: self.skip_validation
                || file.as_ref().map(|f| f.skip_validation()).unwrap_or(false),
        };
        resolved.validate_values()?;
        Ok(resolved)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::PricingError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "project-pricer",
            "--hours-per-week",
            "35",
            "--client-license",
            "1.5",
            "--format",
            "csv",
        ]);
        assert_eq!(cli.hours_per_week, Some(35.0));
        assert_eq!(cli.client_license, Some(1.5));
        assert_eq!(cli.format, Some(OutputFormat::Csv));
        assert!(!cli.skip_validation);
    }

    #[test]
    fn test_negative_flag_values_accepted() {
        let cli = CliConfig::parse_from(["project-pricer", "--delivery-risk", "-0.25"]);
        assert_eq!(cli.delivery_risk, Some(-0.25));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let resolved = CliConfig::default().resolve().unwrap();
        assert_eq!(resolved.snapshot, PricingSnapshot::default());
        assert_eq!(resolved.format, OutputFormat::Text);
        assert!(resolved.output_path.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[inputs]
hours_per_week = 30
weeks_per_year = 48

[report]
format = "json"
output_path = "from-file.json"
"#,
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().to_string()),
            hours_per_week: Some(25.0),
            ..CliConfig::default()
        };
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.snapshot.inputs.hours_per_week, 25.0);
        assert_eq!(resolved.snapshot.inputs.weeks_per_year, 48.0);
        assert_eq!(resolved.format, OutputFormat::Json);
        assert_eq!(resolved.output_path.as_deref(), Some("from-file.json"));
    }

    #[test]
    fn test_each_flag_group_overrides_defaults() {
        let cli = CliConfig::parse_from([
            "project-pricer",
            "--project-price",
            "9000",
            "--delivery-quality",
            "0.4",
            "--price-per-post",
            "500",
        ]);
        let resolved = cli.resolve().unwrap();
        let defaults = PricingSnapshot::default();

        assert_eq!(resolved.snapshot.inputs.project_price, 9000.0);
        assert_eq!(resolved.snapshot.variables.delivery_quality, 0.4);
        assert_eq!(resolved.snapshot.extras.price_per_post, 500.0);
        assert_eq!(resolved.snapshot.inputs.hours_per_week, defaults.inputs.hours_per_week);
        assert_eq!(resolved.snapshot.variables.client_pps, defaults.variables.client_pps);
        assert_eq!(resolved.snapshot.extras.number_of_posts, defaults.extras.number_of_posts);
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let cli = CliConfig {
            config: Some("/nonexistent/pricing.toml".to_string()),
            ..CliConfig::default()
        };
        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, PricingError::ConfigReadError { .. }));
    }

    #[test]
    fn test_infinite_flag_rejected() {
        let cli = CliConfig {
            annual_income_goal: Some(f64::INFINITY),
            ..CliConfig::default()
        };
        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, PricingError::InvalidConfigValueError { .. }));
    }
}
