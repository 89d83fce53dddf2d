use super::types::SimulationInputs;

const PAYOUT_EPS: f64 = 1e-9;

/// Constants derived once from the purchase and financing inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Acquisition {
    pub purchase_price: f64,
    pub side_cost_rate: f64,
    pub side_costs_variable: f64,
    pub side_costs_total: f64,
    pub total_investment: f64,
    pub financing_need: f64,
    pub loan_amount: f64,
    pub disagio: f64,
    pub building_share: f64,
    pub afa_basis: f64,
    pub purchase_cost_basis: f64,
}

impl Acquisition {
    pub(crate) fn from_inputs(inputs: &SimulationInputs) -> Self {
        let purchase_price = inputs.building_value + inputs.land_value;
        let side_cost_rate = inputs.transfer_tax_rate
            + inputs.broker_rate
            + inputs.registry_rate
            + inputs.notary_rate;
        let side_costs_variable = purchase_price * side_cost_rate;
        let side_costs_total = side_costs_variable + inputs.company_cost;

        let total_investment =
            purchase_price + inputs.fitting_up + inputs.initial_repairs + side_costs_total;
        // Not clamped: surplus equity yields a negative financing need.
        let financing_need = total_investment - inputs.equity;

        let payout_factor = 1.0 - inputs.discount_rate;
        let loan_amount = if payout_factor.abs() < PAYOUT_EPS {
            financing_need
        } else {
            financing_need / payout_factor
        };
        let disagio = loan_amount - financing_need;

        let building_share = if purchase_price == 0.0 {
            0.0
        } else {
            inputs.building_value / purchase_price
        };
        let capitalised_side_costs = side_costs_variable * building_share;
        let afa_basis = inputs.building_value + inputs.fitting_up + capitalised_side_costs;
        let purchase_cost_basis = purchase_price + inputs.fitting_up + capitalised_side_costs;

        Self {
            purchase_price,
            side_cost_rate,
            side_costs_variable,
            side_costs_total,
            total_investment,
            financing_need,
            loan_amount,
            disagio,
            building_share,
            afa_basis,
            purchase_cost_basis,
        }
    }
}
