use crate::core::calc::{calculate, calculate_with_validation};
use crate::domain::{CalculationResult, PricingSource};
use crate::utils::error::Result;

pub struct PricingEngine<S: PricingSource> {
    source: S,
    skip_validation: bool,
}

impl<S: PricingSource> PricingEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            skip_validation: false,
        }
    }

    pub fn with_validation(source: S, validate: bool) -> Self {
        Self {
            source,
            skip_validation: !validate,
        }
    }

    pub fn run(&self) -> Result<CalculationResult> {
        let snapshot = self.source.snapshot();
        tracing::debug!("Inputs: {:?}", snapshot.inputs);
        tracing::debug!(
            "Variables: {:?} (ratio sum {})",
            snapshot.variables,
            snapshot.variables.ratio_sum()
        );
        tracing::debug!("Extras: {:?}", snapshot.extras);

        let result = if self.skip_validation {
            tracing::warn!("Input validation skipped");
            calculate(&snapshot.inputs, &snapshot.variables, &snapshot.extras)
        } else {
            calculate_with_validation(&snapshot.inputs, &snapshot.variables, &snapshot.extras)
        };

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Calculation rejected: {} ({:?})", e, e.category());
                return Err(e);
            }
        };

        let outputs = &result.outputs;
        tracing::info!(
            "Worth per hour {}, project cost {}, price per asset {}",
            outputs.formatted.worth_per_hour,
            outputs.formatted.project_cost,
            outputs.formatted.price_per_asset
        );
        if outputs.comparisons.effective_hourly_rate.is_none() {
            tracing::debug!("No project hours, effective hourly rate not reported");
        }

        Ok(result)
    }
}
