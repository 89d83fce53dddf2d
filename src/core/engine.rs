use super::acquisition::Acquisition;
use super::amortization::{LoanSchedule, LoanState};
use super::kpis::aggregate_kpis;
use super::types::{
    SaleEvent, SaleMode, SimulationInputs, SimulationMeta, SimulationResult, YearRecord,
};

/// Sales up to and including this holding year are subject to capital-gains tax.
pub const SPECULATION_PERIOD_YEARS: u32 = 10;

const DISAGIO_EPS: f64 = 1e-6;

/// Per-run constants shared by every year of the ledger.
struct LedgerContext<'a> {
    inputs: &'a SimulationInputs,
    acquisition: Acquisition,
    schedule: LoanSchedule,
    sale_year: Option<u32>,
}

/// Accumulators carried from one simulated year into the next.
#[derive(Debug, Clone, Copy)]
struct RunningState {
    loan: LoanState,
    cumulative_cash_flow: f64,
    land_value: f64,
    building_value: f64,
    sold_in: Option<u32>,
    refinancing_annuity: Option<f64>,
}

impl RunningState {
    fn opening(inputs: &SimulationInputs, acquisition: &Acquisition) -> Self {
        Self {
            loan: LoanState::open(acquisition.loan_amount),
            cumulative_cash_flow: 0.0,
            land_value: inputs.land_value,
            building_value: inputs.building_value + inputs.fitting_up,
            sold_in: None,
            refinancing_annuity: None,
        }
    }
}

/// Runs the full yearly projection for a single purchase.
///
/// Pure and deterministic: identical inputs always produce an identical result.
pub fn simulate(inputs: &SimulationInputs) -> SimulationResult {
    let horizon = inputs.horizon_years();
    let acquisition = Acquisition::from_inputs(inputs);
    let schedule = LoanSchedule::new(
        acquisition.loan_amount,
        inputs.interest_rate_1,
        inputs.loan_term_years_1,
        inputs.interest_rate_2,
        inputs.loan_term_years_2,
    );
    let ctx = LedgerContext {
        inputs,
        acquisition,
        schedule,
        sale_year: scheduled_sale_year(inputs),
    };

    let mut years = Vec::with_capacity(horizon as usize);
    let closing = (1..=horizon).fold(
        RunningState::opening(inputs, &acquisition),
        |state, year| {
            let (next, record) = advance_year(&ctx, state, year);
            years.push(record);
            next
        },
    );

    let kpis = aggregate_kpis(inputs, &years, closing.sold_in, horizon);
    let meta = SimulationMeta {
        purchase_price: acquisition.purchase_price,
        side_cost_rate: acquisition.side_cost_rate,
        side_costs_total: acquisition.side_costs_total,
        total_investment: acquisition.total_investment,
        financing_need: acquisition.financing_need,
        loan_amount: acquisition.loan_amount,
        disagio: acquisition.disagio,
        afa_basis: acquisition.afa_basis,
        purchase_cost_basis: acquisition.purchase_cost_basis,
        annuity_1: schedule.annuity_1,
        annuity_2: closing.refinancing_annuity,
    };

    SimulationResult { years, kpis, meta }
}

impl SimulationInputs {
    /// Number of simulated years; non-positive horizons run a single year.
    pub fn horizon_years(&self) -> u32 {
        self.investment_horizon_years.max(1) as u32
    }
}

/// Year in which the sale fires, if selling into a year that can be simulated.
fn scheduled_sale_year(inputs: &SimulationInputs) -> Option<u32> {
    match inputs.sale_mode {
        SaleMode::Hold => None,
        SaleMode::Sell => inputs
            .sale_year
            .and_then(|year| u32::try_from(year).ok())
            .filter(|year| *year >= 1),
    }
}

fn advance_year(
    ctx: &LedgerContext<'_>,
    state: RunningState,
    year: u32,
) -> (RunningState, YearRecord) {
    let inputs = ctx.inputs;
    let acq = &ctx.acquisition;
    let elapsed = (year - 1) as i32;

    let (mut loan, debt_service) = state.loan.advance(&ctx.schedule, year);
    let refinancing_annuity = state.refinancing_annuity.or(loan.refinancing_annuity());

    let gross_rent = inputs.monthly_rent * 12.0 * (1.0 + inputs.rent_growth).powi(elapsed);
    let net_rent = gross_rent * (1.0 - inputs.vacancy_rate);
    let maintenance = if year == 1 {
        -(inputs.annual_maintenance + inputs.initial_repairs)
    } else {
        -inputs.annual_maintenance * (1.0 + inputs.maintenance_growth).powi(elapsed)
    };
    let depreciation =
        -acq.afa_basis * inputs.afa_model.rate(year, inputs.building_lifetime_years);
    let interest_expense = -debt_service.interest;
    let principal_flow = -debt_service.principal;

    let mut taxable_result = net_rent + maintenance + interest_expense + depreciation;
    if year == 1 && acq.disagio.abs() > DISAGIO_EPS {
        taxable_result -= acq.disagio;
    }
    let tax_cash = -inputs.income_tax_rate * taxable_result;

    let cash_before_tax = net_rent + maintenance + interest_expense + principal_flow;
    let mut cash_after_tax = cash_before_tax + tax_cash;

    // Values keep rolling after a sale; only the reported value is zeroed.
    let land_value = state.land_value * (1.0 + inputs.land_growth_rate);
    let building_value = state.building_value
        * (1.0 - inputs.building_loss_rate + inputs.construction_cost_growth);
    let property_value = land_value + building_value;

    let mut cumulative_cash_flow = state.cumulative_cash_flow + cash_after_tax;

    let mut sold_in = state.sold_in;
    let mut sale = None;
    if sold_in.is_none() && ctx.sale_year == Some(year) {
        let (settled, event) = liquidate(ctx, loan, property_value, year);
        loan = settled;
        cash_after_tax += event.net_proceeds;
        cumulative_cash_flow += event.net_proceeds;
        sold_in = Some(year);
        sale = Some(event);
    }

    let wealth_from_cf_and_loan = cumulative_cash_flow + loan.cumulative_principal;
    let equity_position = if sold_in.is_some() {
        wealth_from_cf_and_loan - acq.total_investment
    } else {
        property_value + wealth_from_cf_and_loan - acq.total_investment
    };
    let property_value = if sold_in.is_some() { 0.0 } else { property_value };

    let record = YearRecord {
        year,
        calendar_year: inputs.start_year.saturating_add(elapsed),
        loan_phase: debt_service.phase,
        remaining_debt: loan.remaining_debt,
        loan_payment: debt_service.payment,
        interest_paid: debt_service.interest,
        principal_paid: debt_service.principal,
        gross_rent,
        net_rent,
        maintenance,
        depreciation,
        taxable_result,
        tax_cash,
        cash_before_tax,
        cash_after_tax,
        cumulative_cash_flow,
        property_value,
        wealth_from_cf_and_loan,
        equity_position,
        sale,
    };
    let next = RunningState {
        loan,
        cumulative_cash_flow,
        land_value,
        building_value,
        sold_in,
        refinancing_annuity,
    };
    (next, record)
}

/// Sells the property at this year's value and pays off the loan.
///
/// Proceeds are assumed to cover the outstanding debt.
fn liquidate(
    ctx: &LedgerContext<'_>,
    loan: LoanState,
    property_value: f64,
    year: u32,
) -> (LoanState, SaleEvent) {
    let inputs = ctx.inputs;
    let sale_gross = property_value * (1.0 - inputs.selling_cost_rate);
    let capital_gain = sale_gross - ctx.acquisition.purchase_cost_basis;
    let capital_gains_tax = if year <= SPECULATION_PERIOD_YEARS && capital_gain > 0.0 {
        capital_gain * inputs.income_tax_rate
    } else {
        0.0
    };
    let (settled, debt_repaid) = loan.settle();
    let net_proceeds = sale_gross - debt_repaid - capital_gains_tax;

    tracing::debug!(
        year,
        sale_gross,
        capital_gain,
        capital_gains_tax,
        debt_repaid,
        "property sold"
    );

    (
        settled,
        SaleEvent {
            sale_gross,
            capital_gain,
            capital_gains_tax,
            debt_repaid,
            net_proceeds,
        },
    )
}
