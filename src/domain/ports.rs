use crate::domain::model::{Extras, Inputs, PricingSnapshot, Variables};

/// Anything that can hand the calculator a complete input snapshot.
pub trait PricingSource: Send + Sync {
    fn inputs(&self) -> Inputs;
    fn variables(&self) -> Variables;
    fn extras(&self) -> Extras;

    fn snapshot(&self) -> PricingSnapshot {
        PricingSnapshot {
            inputs: self.inputs(),
            variables: self.variables(),
            extras: self.extras(),
        }
    }
}

impl PricingSource for PricingSnapshot {
    fn inputs(&self) -> Inputs {
        self.inputs
    }

    fn variables(&self) -> Variables {
        self.variables
    }

    fn extras(&self) -> Extras {
        self.extras
    }
}
