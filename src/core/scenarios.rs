use serde::Serialize;

use super::engine::simulate;
use super::types::{SimulationInputs, SimulationResult};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Base,
    Optimistic,
    Pessimistic,
}

/// Absolute shifts (decimal fractions) applied to the base inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScenarioOffsets {
    pub rent_growth: f64,
    pub vacancy_rate: f64,
    pub land_growth_rate: f64,
    pub interest_rate: f64,
}

impl Default for ScenarioOffsets {
    fn default() -> Self {
        Self {
            rent_growth: 0.005,
            vacancy_rate: 0.02,
            land_growth_rate: 0.005,
            interest_rate: 0.005,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    pub base: SimulationResult,
    pub optimistic: SimulationResult,
    pub pessimistic: SimulationResult,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &SimulationResult {
        match kind {
            ScenarioKind::Base => &self.base,
            ScenarioKind::Optimistic => &self.optimistic,
            ScenarioKind::Pessimistic => &self.pessimistic,
        }
    }
}

/// Shifts the base inputs towards the favourable or unfavourable side.
pub fn derive_variant(
    base: &SimulationInputs,
    kind: ScenarioKind,
    offsets: &ScenarioOffsets,
) -> SimulationInputs {
    let sign = match kind {
        ScenarioKind::Base => return base.clone(),
        ScenarioKind::Optimistic => 1.0,
        ScenarioKind::Pessimistic => -1.0,
    };
    SimulationInputs {
        rent_growth: base.rent_growth + sign * offsets.rent_growth,
        vacancy_rate: (base.vacancy_rate - sign * offsets.vacancy_rate).max(0.0),
        land_growth_rate: base.land_growth_rate + sign * offsets.land_growth_rate,
        interest_rate_1: (base.interest_rate_1 - sign * offsets.interest_rate).max(0.0),
        interest_rate_2: (base.interest_rate_2 - sign * offsets.interest_rate).max(0.0),
        ..base.clone()
    }
}

/// Simulates the base case and both variants in parallel.
pub fn simulate_scenarios(base: &SimulationInputs, offsets: &ScenarioOffsets) -> ScenarioSet {
    let optimistic_inputs = derive_variant(base, ScenarioKind::Optimistic, offsets);
    let pessimistic_inputs = derive_variant(base, ScenarioKind::Pessimistic, offsets);

    let (base, (optimistic, pessimistic)) = rayon::join(
        || simulate(base),
        || {
            rayon::join(
                || simulate(&optimistic_inputs),
                || simulate(&pessimistic_inputs),
            )
        },
    );

    ScenarioSet {
        base,
        optimistic,
        pessimistic,
    }
}
