mod acquisition;
mod amortization;
mod depreciation;
mod engine;
mod kpis;
mod scenarios;
mod types;

pub use amortization::annuity_payment;
pub use engine::{SPECULATION_PERIOD_YEARS, simulate};
pub use scenarios::{
    ScenarioKind, ScenarioOffsets, ScenarioSet, derive_variant, simulate_scenarios,
};
pub use types::{
    AfaModel, Kpis, LoanPhase, SaleEvent, SaleMode, SimulationInputs, SimulationMeta,
    SimulationResult, YearRecord,
};
