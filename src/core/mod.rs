pub mod calc;
pub mod calculator;
pub mod engine;
pub mod format;
pub mod report;
pub mod validator;

pub use crate::domain::{CalculationResult, Extras, Inputs, Outputs, PricingSource, Variables};
pub use crate::utils::error::Result;
