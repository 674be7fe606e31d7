// Domain layer: value records and ports. No dependencies beyond std/serde.

pub mod model;
pub mod outputs;
pub mod ports;

pub use model::{Extras, Inputs, PricingSnapshot, VariableKind, Variables};
pub use outputs::{
    Breakdown, CalculationResult, Comparisons, Formatted, IndividualVariables, Outputs,
    VariableAmount,
};
pub use ports::PricingSource;
