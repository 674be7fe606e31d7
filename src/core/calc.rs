use crate::core::format::{format_currency, format_number};
use crate::core::validator::validate_inputs;
use crate::domain::{
    Breakdown, CalculationResult, Comparisons, Extras, Formatted, IndividualVariables, Inputs,
    Outputs, VariableAmount, VariableKind, Variables,
};
use crate::utils::error::{Divisor, PricingError, Result};

/// Scalar results of the base derivation, before comparisons and display strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFigures {
    pub workable_hours: f64,
    pub worth_per_hour: f64,
    pub base_labor_cost: f64,
    pub variable_adjustments: f64,
    pub total_labor_cost: f64,
    pub project_cost: f64,
    pub price_per_asset: f64,
}

pub fn workable_hours(hours_per_week: f64, weeks_per_year: f64) -> f64 {
    hours_per_week * weeks_per_year
}

pub fn worth_per_hour(annual_income_goal: f64, workable_hours: f64) -> Result<f64> {
    if workable_hours == 0.0 {
        return Err(PricingError::DivisionByZero {
            divisor: Divisor::WorkableHours,
        });
    }
    Ok(annual_income_goal / workable_hours)
}

pub fn base_labor_cost(worth_per_hour: f64, hours_for_project: f64) -> f64 {
    worth_per_hour * hours_for_project
}

/// Each ratio is applied to the same base; the terms are summed, never compounded.
pub fn variable_adjustments(base_labor_cost: f64, variables: &Variables) -> f64 {
    VariableKind::ALL
        .iter()
        .map(|kind| base_labor_cost * variables.get(*kind))
        .sum()
}

pub fn project_cost(total_labor_cost: f64, project_expenses: f64) -> f64 {
    total_labor_cost + project_expenses
}

pub fn price_per_asset(project_cost: f64, number_of_assets: f64) -> Result<f64> {
    if number_of_assets == 0.0 {
        return Err(PricingError::DivisionByZero {
            divisor: Divisor::NumberOfAssets,
        });
    }
    Ok(project_cost / number_of_assets)
}

pub fn effective_hourly_rate(total_labor_cost: f64, hours_for_project: f64) -> Result<f64> {
    if hours_for_project == 0.0 {
        return Err(PricingError::DivisionByZero {
            divisor: Divisor::HoursForProject,
        });
    }
    Ok(total_labor_cost / hours_for_project)
}

pub fn individual_variables(base_labor_cost: f64, variables: &Variables) -> IndividualVariables {
    let entry = |kind: VariableKind| {
        let ratio = variables.get(kind);
        VariableAmount {
            percentage: ratio * 100.0,
            amount: base_labor_cost * ratio,
        }
    };

    IndividualVariables {
        client_pps: entry(VariableKind::ClientPps),
        client_sales: entry(VariableKind::ClientSales),
        client_license: entry(VariableKind::ClientLicense),
        delivery_speed: entry(VariableKind::DeliverySpeed),
        delivery_risk: entry(VariableKind::DeliveryRisk),
        delivery_quality: entry(VariableKind::DeliveryQuality),
    }
}

pub fn derive_base(inputs: &Inputs, variables: &Variables) -> Result<BaseFigures> {
    let workable_hours = workable_hours(inputs.hours_per_week, inputs.weeks_per_year);
    let worth_per_hour = worth_per_hour(inputs.annual_income_goal, workable_hours)?;
    let base_labor_cost = base_labor_cost(worth_per_hour, inputs.hours_for_project);
    let variable_adjustments = variable_adjustments(base_labor_cost, variables);

    // The adjustments replace the base labor cost; they are not added to it.
    let total_labor_cost = variable_adjustments;
    let project_cost = project_cost(total_labor_cost, inputs.project_expenses);
    let price_per_asset = price_per_asset(project_cost, inputs.number_of_assets)?;

    Ok(BaseFigures {
        workable_hours,
        worth_per_hour,
        base_labor_cost,
        variable_adjustments,
        total_labor_cost,
        project_cost,
        price_per_asset,
    })
}

fn comparisons(base: &BaseFigures, inputs: &Inputs, extras: &Extras) -> Comparisons {
    let variable_vs_base_percentage = if base.base_labor_cost == 0.0 {
        None
    } else {
        Some((base.variable_adjustments - base.base_labor_cost) / base.base_labor_cost * 100.0)
    };

    let project_vs_set_price_diff = if inputs.project_price > 0.0 {
        Some(base.project_cost - inputs.project_price)
    } else {
        None
    };

    Comparisons {
        variable_vs_base_percentage,
        effective_hourly_rate: effective_hourly_rate(
            base.total_labor_cost,
            inputs.hours_for_project,
        )
        .ok(),
        target_vs_current_rate_diff: base.worth_per_hour - inputs.hourly_rate,
        posts_revenue: extras.number_of_posts * extras.price_per_post,
        project_vs_set_price_diff,
    }
}

fn breakdown(base: &BaseFigures, inputs: &Inputs) -> Breakdown {
    Breakdown {
        work_calculation: format!(
            "{} × {} = {} hours",
            format_number(inputs.hours_per_week),
            format_number(inputs.weeks_per_year),
            format_number(base.workable_hours)
        ),
        rate_calculation: format!(
            "{} ÷ {} = {}/hour",
            format_currency(inputs.annual_income_goal),
            format_number(base.workable_hours),
            format_currency(base.worth_per_hour)
        ),
        base_labor_calculation: format!(
            "{} × {} = {}",
            format_currency(base.worth_per_hour),
            format_number(inputs.hours_for_project),
            format_currency(base.base_labor_cost)
        ),
        total_labor_calculation: format!(
            "{} (replaces base)",
            format_currency(base.variable_adjustments)
        ),
        final_project_calculation: format!(
            "{} + {} = {}",
            format_currency(base.total_labor_cost),
            format_currency(inputs.project_expenses),
            format_currency(base.project_cost)
        ),
        per_asset_calculation: format!(
            "{} ÷ {} = {}/asset",
            format_currency(base.project_cost),
            format_number(inputs.number_of_assets),
            format_currency(base.price_per_asset)
        ),
    }
}

fn formatted(base: &BaseFigures, posts_revenue: f64) -> Formatted {
    Formatted {
        workable_hours: format_number(base.workable_hours),
        worth_per_hour: format_currency(base.worth_per_hour),
        base_labor_cost: format_currency(base.base_labor_cost),
        variable_adjustments: format_currency(base.variable_adjustments),
        total_labor_cost: format_currency(base.total_labor_cost),
        project_cost: format_currency(base.project_cost),
        price_per_asset: format_currency(base.price_per_asset),
        posts_revenue: format_currency(posts_revenue),
    }
}

/// Derives the full output record without validating `inputs` first.
///
/// Only zero divisors fail; every other value, including negative ones,
/// flows through the arithmetic unchanged.
pub fn calculate(
    inputs: &Inputs,
    variables: &Variables,
    extras: &Extras,
) -> Result<CalculationResult> {
    let base = derive_base(inputs, variables)?;
    let comparisons = comparisons(&base, inputs, extras);

    let outputs = Outputs {
        workable_hours: base.workable_hours,
        worth_per_hour: base.worth_per_hour,
        base_labor_cost: base.base_labor_cost,
        variable_adjustments: base.variable_adjustments,
        total_labor_cost: base.total_labor_cost,
        project_cost: base.project_cost,
        project_floor_price: base.project_cost,
        price_per_asset: base.price_per_asset,
        individual_variables: individual_variables(base.base_labor_cost, variables),
        comparisons,
        breakdown: breakdown(&base, inputs),
        formatted: formatted(&base, comparisons.posts_revenue),
    };

    Ok(CalculationResult {
        inputs: *inputs,
        outputs,
        variables: *variables,
        extras: *extras,
    })
}

pub fn calculate_with_validation(
    inputs: &Inputs,
    variables: &Variables,
    extras: &Extras,
) -> Result<CalculationResult> {
    validate_inputs(inputs)?;
    calculate(inputs, variables, extras)
}
