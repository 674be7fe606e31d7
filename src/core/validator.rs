use crate::domain::Inputs;
use crate::utils::error::Result;
use crate::utils::validation::{validate_greater_than_zero, validate_non_negative, Validate};

/// Checks the rules below in order and reports the first one violated.
/// Variables and extras are deliberately not checked.
pub fn validate_inputs(inputs: &Inputs) -> Result<()> {
    validate_greater_than_zero("hours_per_week", "Hours per week", inputs.hours_per_week)?;
    validate_greater_than_zero("weeks_per_year", "Weeks per year", inputs.weeks_per_year)?;
    validate_greater_than_zero(
        "annual_income_goal",
        "Annual income goal",
        inputs.annual_income_goal,
    )?;
    validate_non_negative(
        "hours_for_project",
        "Hours for project",
        inputs.hours_for_project,
    )?;
    validate_non_negative("project_expenses", "Project expenses", inputs.project_expenses)?;
    validate_greater_than_zero(
        "number_of_assets",
        "Number of assets",
        inputs.number_of_assets,
    )?;
    Ok(())
}

impl Validate for Inputs {
    fn validate(&self) -> Result<()> {
        validate_inputs(self)
    }
}
