use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaleMode {
    #[default]
    Hold,
    Sell,
}

/// Depreciation (AfA) policy applied to the depreciation basis each year.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AfaModel {
    /// 2% for years 1-50.
    #[default]
    Linear2,
    /// 3% for years 1-33.
    Linear3,
    /// 5% for years 1-6, then 2% without end.
    Degressive5ThenLinear2,
    /// 5% for years 1-6, then 3% without end.
    Degressive5ThenLinear3,
    /// 1 / building lifetime for the lifetime of the building.
    RemainingLife,
    /// Fallback for unrecognised labels: 2% every year, never expiring.
    Flat2Unbounded,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanPhase {
    Loan1Active,
    Loan2Active,
    Repaid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    pub building_value: f64,
    pub land_value: f64,
    pub transfer_tax_rate: f64,
    pub broker_rate: f64,
    pub registry_rate: f64,
    pub notary_rate: f64,
    pub company_cost: f64,
    pub fitting_up: f64,
    pub initial_repairs: f64,

    pub building_loss_rate: f64,
    pub land_growth_rate: f64,
    pub construction_cost_growth: f64,

    pub annual_maintenance: f64,
    pub maintenance_growth: f64,

    pub sqm: f64,
    pub monthly_rent: f64,
    pub vacancy_rate: f64,
    pub rent_growth: f64,

    pub income_tax_rate: f64,

    pub equity: f64,
    pub loan_term_years_1: u32,
    pub interest_rate_1: f64,
    pub discount_rate: f64,
    pub loan_term_years_2: u32,
    pub interest_rate_2: f64,

    pub selling_cost_rate: f64,
    pub sale_mode: SaleMode,
    pub sale_year: Option<i32>,

    pub investment_horizon_years: i32,
    pub start_year: i32,

    pub alt_return_before_tax: f64,
    pub alt_tax_rate: f64,

    pub afa_model: AfaModel,
    pub building_lifetime_years: u32,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            building_value: 0.0,
            land_value: 0.0,
            transfer_tax_rate: 0.0,
            broker_rate: 0.0,
            registry_rate: 0.0,
            notary_rate: 0.0,
            company_cost: 0.0,
            fitting_up: 0.0,
            initial_repairs: 0.0,
            building_loss_rate: 0.0,
            land_growth_rate: 0.0,
            construction_cost_growth: 0.0,
            annual_maintenance: 0.0,
            maintenance_growth: 0.0,
            sqm: 0.0,
            monthly_rent: 0.0,
            vacancy_rate: 0.0,
            rent_growth: 0.0,
            income_tax_rate: 0.0,
            equity: 0.0,
            loan_term_years_1: 0,
            interest_rate_1: 0.0,
            discount_rate: 0.0,
            loan_term_years_2: 0,
            interest_rate_2: 0.0,
            selling_cost_rate: 0.0,
            sale_mode: SaleMode::Hold,
            sale_year: None,
            investment_horizon_years: 1,
            start_year: 2025,
            alt_return_before_tax: 0.0,
            alt_tax_rate: 0.0,
            afa_model: AfaModel::Linear2,
            building_lifetime_years: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEvent {
    pub sale_gross: f64,
    pub capital_gain: f64,
    pub capital_gains_tax: f64,
    pub debt_repaid: f64,
    pub net_proceeds: f64,
}

/// One simulated year. Expense-type fields are negative cash flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: u32,
    pub calendar_year: i32,
    pub loan_phase: LoanPhase,
    pub remaining_debt: f64,
    pub loan_payment: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub gross_rent: f64,
    pub net_rent: f64,
    pub maintenance: f64,
    pub depreciation: f64,
    pub taxable_result: f64,
    pub tax_cash: f64,
    pub cash_before_tax: f64,
    pub cash_after_tax: f64,
    pub cumulative_cash_flow: f64,
    pub property_value: f64,
    pub wealth_from_cf_and_loan: f64,
    pub equity_position: f64,
    pub sale: Option<SaleEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub years_used: u32,
    pub sale_year: Option<u32>,
    pub total_profit: f64,
    pub roe_total: f64,
    pub roe_annualized: f64,
    pub equity_multiple: f64,
    pub cash_on_cash_year1: f64,
    pub alt_after_tax_return: f64,
    pub alt_end_value: f64,
    pub alt_profit: f64,
    pub excess_profit_vs_alt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMeta {
    pub purchase_price: f64,
    pub side_cost_rate: f64,
    pub side_costs_total: f64,
    pub total_investment: f64,
    pub financing_need: f64,
    pub loan_amount: f64,
    pub disagio: f64,
    pub afa_basis: f64,
    pub purchase_cost_basis: f64,
    pub annuity_1: f64,
    pub annuity_2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub years: Vec<YearRecord>,
    pub kpis: Kpis,
    pub meta: SimulationMeta,
}
