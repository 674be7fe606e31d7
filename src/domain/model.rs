use serde::{Deserialize, Serialize};

/// Work schedule, income goal and project scope entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub hours_per_week: f64,
    pub weeks_per_year: f64,
    /// Current rate, only used for comparison.
    pub hourly_rate: f64,
    pub annual_income_goal: f64,
    pub hours_for_project: f64,
    pub project_expenses: f64,
    pub number_of_assets: f64,
    /// Price already quoted to the client; 0 means none.
    pub project_price: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            hours_per_week: 40.0,
            weeks_per_year: 42.0,
            hourly_rate: 100.0,
            annual_income_goal: 200_000.0,
            hours_for_project: 20.0,
            project_expenses: 3500.0,
            number_of_assets: 10.0,
            project_price: 0.0,
        }
    }
}

/// Client and delivery ratios, each applied to the base labor cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variables {
    pub client_pps: f64,
    pub client_sales: f64,
    pub client_license: f64,
    pub delivery_speed: f64,
    pub delivery_risk: f64,
    pub delivery_quality: f64,
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            client_pps: 0.2,
            client_sales: 0.2,
            client_license: 2.5,
            delivery_speed: 0.35,
            delivery_risk: 0.15,
            delivery_quality: 0.1,
        }
    }
}

impl Variables {
    pub fn get(&self, kind: VariableKind) -> f64 {
        match kind {
            VariableKind::ClientPps => self.client_pps,
            VariableKind::ClientSales => self.client_sales,
            VariableKind::ClientLicense => self.client_license,
            VariableKind::DeliverySpeed => self.delivery_speed,
            VariableKind::DeliveryRisk => self.delivery_risk,
            VariableKind::DeliveryQuality => self.delivery_quality,
        }
    }

    /// Sum of all six ratios; total labor cost is base labor cost × this sum.
    pub fn ratio_sum(&self) -> f64 {
        VariableKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }
}

/// Side revenue figures, outside the pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    pub number_of_posts: f64,
    pub price_per_post: f64,
}

impl Default for Extras {
    fn default() -> Self {
        Self {
            number_of_posts: 3.0,
            price_per_post: 450.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    ClientPps,
    ClientSales,
    ClientLicense,
    DeliverySpeed,
    DeliveryRisk,
    DeliveryQuality,
}

impl VariableKind {
    pub const ALL: [VariableKind; 6] = [
        VariableKind::ClientPps,
        VariableKind::ClientSales,
        VariableKind::ClientLicense,
        VariableKind::DeliverySpeed,
        VariableKind::DeliveryRisk,
        VariableKind::DeliveryQuality,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VariableKind::ClientPps => "clientPps",
            VariableKind::ClientSales => "clientSales",
            VariableKind::ClientLicense => "clientLicense",
            VariableKind::DeliverySpeed => "deliverySpeed",
            VariableKind::DeliveryRisk => "deliveryRisk",
            VariableKind::DeliveryQuality => "deliveryQuality",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VariableKind::ClientPps => "Client PPS",
            VariableKind::ClientSales => "Client Sales",
            VariableKind::ClientLicense => "Client License",
            VariableKind::DeliverySpeed => "Delivery Speed",
            VariableKind::DeliveryRisk => "Delivery Risk",
            VariableKind::DeliveryQuality => "Delivery Quality",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            VariableKind::ClientPps => "blue",
            VariableKind::ClientSales => "green",
            VariableKind::ClientLicense => "purple",
            VariableKind::DeliverySpeed => "orange",
            VariableKind::DeliveryRisk => "red",
            VariableKind::DeliveryQuality => "yellow",
        }
    }
}

/// One immutable set of everything the calculator reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    pub inputs: Inputs,
    pub variables: Variables,
    pub extras: Extras,
}
