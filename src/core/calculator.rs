use crate::core::calc::{base_labor_cost, calculate, workable_hours, worth_per_hour};
use crate::domain::{CalculationResult, Extras, Inputs, VariableKind, Variables};
use crate::utils::error::Result;
use serde::Serialize;

/// Outcome of evaluating one input snapshot, for surfaces that recompute on
/// every edit and show the error inline instead of aborting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    pub result: Option<CalculationResult>,
    pub error: Option<String>,
    pub is_valid: bool,
}

impl CalculatorState {
    pub fn evaluate(inputs: &Inputs, variables: &Variables, extras: &Extras) -> Self {
        match calculate(inputs, variables, extras) {
            Ok(result) => Self {
                result: Some(result),
                error: None,
                is_valid: true,
            },
            Err(e) => Self {
                result: None,
                error: Some(e.to_string()),
                is_valid: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableLine {
    pub kind: VariableKind,
    pub name: &'static str,
    pub percentage: f64,
    pub amount: f64,
    pub color: &'static str,
}

/// Labelled per-variable amounts in display order.
pub fn variable_breakdown(inputs: &Inputs, variables: &Variables) -> Result<Vec<VariableLine>> {
    let hours = workable_hours(inputs.hours_per_week, inputs.weeks_per_year);
    let base = base_labor_cost(
        worth_per_hour(inputs.annual_income_goal, hours)?,
        inputs.hours_for_project,
    );

    Ok(VariableKind::ALL
        .iter()
        .map(|kind| {
            let ratio = variables.get(*kind);
            VariableLine {
                kind: *kind,
                name: kind.label(),
                percentage: ratio * 100.0,
                amount: base * ratio,
                color: kind.color(),
            }
        })
        .collect())
}
