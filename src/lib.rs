pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ResolvedConfig};
pub use self::core::{
    calc::{calculate, calculate_with_validation},
    calculator::{variable_breakdown, CalculatorState, VariableLine},
    engine::PricingEngine,
    report::{render, write_report, OutputFormat},
    validator::validate_inputs,
};
pub use domain::{
    CalculationResult, Extras, Inputs, Outputs, PricingSnapshot, PricingSource, VariableKind,
    Variables,
};
pub use utils::error::{PricingError, Result};
