use crate::domain::model::{Extras, Inputs, VariableKind, Variables};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableAmount {
    pub percentage: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualVariables {
    pub client_pps: VariableAmount,
    pub client_sales: VariableAmount,
    pub client_license: VariableAmount,
    pub delivery_speed: VariableAmount,
    pub delivery_risk: VariableAmount,
    pub delivery_quality: VariableAmount,
}

impl IndividualVariables {
    pub fn get(&self, kind: VariableKind) -> &VariableAmount {
        match kind {
            VariableKind::ClientPps => &self.client_pps,
            VariableKind::ClientSales => &self.client_sales,
            VariableKind::ClientLicense => &self.client_license,
            VariableKind::DeliverySpeed => &self.delivery_speed,
            VariableKind::DeliveryRisk => &self.delivery_risk,
            VariableKind::DeliveryQuality => &self.delivery_quality,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableKind, &VariableAmount)> + '_ {
        VariableKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn total_amount(&self) -> f64 {
        self.iter().map(|(_, v)| v.amount).sum()
    }
}

/// Metrics marked `Option` are `None` when the comparison is undefined
/// or was not requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparisons {
    pub variable_vs_base_percentage: Option<f64>,
    pub effective_hourly_rate: Option<f64>,
    pub target_vs_current_rate_diff: f64,
    pub posts_revenue: f64,
    pub project_vs_set_price_diff: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub work_calculation: String,
    pub rate_calculation: String,
    pub base_labor_calculation: String,
    pub total_labor_calculation: String,
    pub final_project_calculation: String,
    pub per_asset_calculation: String,
}

impl Breakdown {
    pub fn lines(&self) -> [(&'static str, &str); 6] {
        [
            ("Work", self.work_calculation.as_str()),
            ("Rate", self.rate_calculation.as_str()),
            ("Base labor", self.base_labor_calculation.as_str()),
            ("Total labor", self.total_labor_calculation.as_str()),
            ("Project", self.final_project_calculation.as_str()),
            ("Per asset", self.per_asset_calculation.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatted {
    pub workable_hours: String,
    pub worth_per_hour: String,
    pub base_labor_cost: String,
    pub variable_adjustments: String,
    pub total_labor_cost: String,
    pub project_cost: String,
    pub price_per_asset: String,
    pub posts_revenue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outputs {
    pub workable_hours: f64,
    pub worth_per_hour: f64,
    pub base_labor_cost: f64,
    pub variable_adjustments: f64,
    pub total_labor_cost: f64,
    pub project_cost: f64,
    /// Same value as `project_cost`, kept for consumers of the older field name.
    pub project_floor_price: f64,
    pub price_per_asset: f64,
    pub individual_variables: IndividualVariables,
    pub comparisons: Comparisons,
    pub breakdown: Breakdown,
    pub formatted: Formatted,
}

/// Outputs together with the snapshot they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub inputs: Inputs,
    pub outputs: Outputs,
    pub variables: Variables,
    pub extras: Extras,
}
