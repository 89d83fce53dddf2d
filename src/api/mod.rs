mod error;

use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    AfaModel, SaleMode, ScenarioOffsets, ScenarioSet, SimulationInputs, SimulationResult,
    simulate, simulate_scenarios,
};

pub use error::{ApiError, ApiResult};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSaleMode {
    Hold,
    Sell,
}

impl From<CliSaleMode> for SaleMode {
    fn from(value: CliSaleMode) -> Self {
        match value {
            CliSaleMode::Hold => SaleMode::Hold,
            CliSaleMode::Sell => SaleMode::Sell,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiSaleMode {
    #[serde(alias = "HOLD", alias = "keep")]
    Hold,
    #[serde(alias = "SELL", alias = "sale")]
    Sell,
}

impl From<ApiSaleMode> for CliSaleMode {
    fn from(value: ApiSaleMode) -> Self {
        match value {
            ApiSaleMode::Hold => CliSaleMode::Hold,
            ApiSaleMode::Sell => CliSaleMode::Sell,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    building_value: Option<f64>,
    land_value: Option<f64>,
    #[serde(alias = "grEStRate")]
    transfer_tax_rate: Option<f64>,
    #[serde(alias = "maklerRate")]
    broker_rate: Option<f64>,
    #[serde(alias = "grundbuchRate")]
    registry_rate: Option<f64>,
    notary_rate: Option<f64>,
    company_cost: Option<f64>,
    fitting_up: Option<f64>,
    initial_repairs: Option<f64>,

    building_loss_rate: Option<f64>,
    land_growth_rate: Option<f64>,
    construction_cost_growth: Option<f64>,

    annual_maintenance: Option<f64>,
    maintenance_growth: Option<f64>,

    sqm: Option<f64>,
    monthly_rent: Option<f64>,
    vacancy_rate: Option<f64>,
    rent_growth: Option<f64>,

    income_tax_rate: Option<f64>,

    equity: Option<f64>,
    loan_term_years_1: Option<u32>,
    interest_rate_1: Option<f64>,
    discount_rate: Option<f64>,
    loan_term_years_2: Option<u32>,
    interest_rate_2: Option<f64>,

    selling_cost_rate: Option<f64>,
    sale_mode: Option<ApiSaleMode>,
    sale_year: Option<i32>,

    investment_horizon_years: Option<i32>,
    start_year: Option<i32>,

    alt_return_before_tax: Option<f64>,
    alt_tax_rate: Option<f64>,

    afa_model: Option<String>,
    building_lifetime_years: Option<u32>,

    rent_growth_offset: Option<f64>,
    vacancy_offset: Option<f64>,
    land_growth_offset: Option<f64>,
    interest_rate_offset: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "immo-roi",
    about = "Cash-flow and return-on-equity projection for a single rental property purchase"
)]
struct Cli {
    #[arg(long, default_value_t = 200_000.0, help = "Building share of the purchase price")]
    building_value: f64,
    #[arg(long, default_value_t = 80_000.0, help = "Land share of the purchase price")]
    land_value: f64,
    #[arg(long, default_value_t = 5.0, help = "Real estate transfer tax in percent")]
    transfer_tax_rate: f64,
    #[arg(long, default_value_t = 3.0, help = "Broker commission in percent")]
    broker_rate: f64,
    #[arg(long, default_value_t = 0.5, help = "Land registry fee in percent")]
    registry_rate: f64,
    #[arg(long, default_value_t = 1.5, help = "Notary fee in percent")]
    notary_rate: f64,
    #[arg(long, default_value_t = 0.0, help = "Fixed company or setup cost")]
    company_cost: f64,
    #[arg(long, default_value_t = 30_000.0, help = "Fit-up cost capitalised into the building")]
    fitting_up: f64,
    #[arg(long, default_value_t = 5_000.0, help = "Repairs expensed in the first year")]
    initial_repairs: f64,
    #[arg(
        long,
        default_value_t = 1.5,
        help = "Annual physical depreciation of the building value in percent"
    )]
    building_loss_rate: f64,
    #[arg(long, default_value_t = 2.0, help = "Annual land value growth in percent")]
    land_growth_rate: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Annual construction cost growth in percent, offsets building loss"
    )]
    construction_cost_growth: f64,
    #[arg(long, default_value_t = 1_500.0, help = "Maintenance cost in the first year")]
    annual_maintenance: f64,
    #[arg(long, default_value_t = 2.0, help = "Annual maintenance cost growth in percent")]
    maintenance_growth: f64,
    #[arg(long, default_value_t = 80.0, help = "Living area in square metres (informational)")]
    sqm: f64,
    #[arg(long, default_value_t = 1_200.0)]
    monthly_rent: f64,
    #[arg(long, default_value_t = 5.0, help = "Vacancy and rent loss in percent")]
    vacancy_rate: f64,
    #[arg(long, default_value_t = 1.0, help = "Annual rent growth in percent")]
    rent_growth: f64,
    #[arg(
        long,
        default_value_t = 30.0,
        help = "Marginal income tax rate in percent, also used for capital gains"
    )]
    income_tax_rate: f64,
    #[arg(long, default_value_t = 80_000.0)]
    equity: f64,
    #[arg(long, default_value_t = 30)]
    loan_term_years_1: u32,
    #[arg(long, default_value_t = 3.5, help = "Fixed interest rate of the first loan in percent")]
    interest_rate_1: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Upfront loan discount (disagio) in percent of the loan amount"
    )]
    discount_rate: f64,
    #[arg(
        long,
        default_value_t = 0,
        help = "Term of the follow-up loan refinancing the residual balance; 0 disables it"
    )]
    loan_term_years_2: u32,
    #[arg(long, default_value_t = 0.0, help = "Interest rate of the follow-up loan in percent")]
    interest_rate_2: f64,
    #[arg(long, default_value_t = 6.0, help = "Selling costs in percent of the sale price")]
    selling_cost_rate: f64,
    #[arg(long, value_enum, default_value_t = CliSaleMode::Hold)]
    sale_mode: CliSaleMode,
    #[arg(long, help = "Year of the sale (1-based); required when --sale-mode=sell")]
    sale_year: Option<i32>,
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    investment_horizon_years: i32,
    #[arg(long, default_value_t = 2025, help = "Calendar year of the first simulated year")]
    start_year: i32,
    #[arg(
        long,
        default_value_t = 6.0,
        help = "Alternative investment return before tax in percent"
    )]
    alt_return_before_tax: f64,
    #[arg(
        long,
        default_value_t = 26.375,
        help = "Tax rate on alternative investment returns in percent"
    )]
    alt_tax_rate: f64,
    #[arg(
        long,
        default_value = "Linear 2%",
        help = "Depreciation model, e.g. \"Linear 2%\", \"Linear 3%\", \"Degressive 5%+Linear 2%\""
    )]
    afa_model: String,
    #[arg(
        long,
        default_value_t = 50,
        help = "Building lifetime used by the remaining-life depreciation model"
    )]
    building_lifetime_years: u32,
    #[arg(long, help = "Run base, optimistic and pessimistic scenarios")]
    scenarios: bool,
    #[arg(long, default_value_t = 0.5, help = "Scenario shift of rent growth in percent points")]
    rent_growth_offset: f64,
    #[arg(long, default_value_t = 2.0, help = "Scenario shift of vacancy in percent points")]
    vacancy_offset: f64,
    #[arg(long, default_value_t = 0.5, help = "Scenario shift of land growth in percent points")]
    land_growth_offset: f64,
    #[arg(
        long,
        default_value_t = 0.5,
        help = "Scenario shift of both loan interest rates in percent points"
    )]
    interest_rate_offset: f64,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: SimulationInputs,
    offsets: ScenarioOffsets,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    afa_model: &'static str,
    horizon_years: u32,
    inputs: SimulationInputs,
    result: SimulationResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenariosResponse {
    afa_model: &'static str,
    horizon_years: u32,
    inputs: SimulationInputs,
    scenarios: ScenarioSet,
}

/// Longest projection accepted from callers.
const MAX_HORIZON_YEARS: i32 = 500;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn percent(value: f64) -> f64 {
    value / 100.0
}

fn build_inputs(cli: &Cli) -> ApiResult<SimulationInputs> {
    for (name, value) in [
        ("--building-value", cli.building_value),
        ("--land-value", cli.land_value),
        ("--company-cost", cli.company_cost),
        ("--fitting-up", cli.fitting_up),
        ("--initial-repairs", cli.initial_repairs),
        ("--annual-maintenance", cli.annual_maintenance),
        ("--sqm", cli.sqm),
        ("--monthly-rent", cli.monthly_rent),
        ("--equity", cli.equity),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::invalid(name, "must be >= 0"));
        }
    }

    for (name, rate) in [
        ("--transfer-tax-rate", cli.transfer_tax_rate),
        ("--broker-rate", cli.broker_rate),
        ("--registry-rate", cli.registry_rate),
        ("--notary-rate", cli.notary_rate),
        ("--vacancy-rate", cli.vacancy_rate),
        ("--income-tax-rate", cli.income_tax_rate),
        ("--selling-cost-rate", cli.selling_cost_rate),
        ("--alt-tax-rate", cli.alt_tax_rate),
    ] {
        if !(0.0..=100.0).contains(&rate) {
            return Err(ApiError::invalid(name, "must be between 0 and 100"));
        }
    }

    if !(0.0..100.0).contains(&cli.discount_rate) {
        return Err(ApiError::invalid(
            "--discount-rate",
            "must be >= 0 and < 100",
        ));
    }

    for (name, rate) in [
        ("--building-loss-rate", cli.building_loss_rate),
        ("--land-growth-rate", cli.land_growth_rate),
        ("--construction-cost-growth", cli.construction_cost_growth),
        ("--maintenance-growth", cli.maintenance_growth),
        ("--rent-growth", cli.rent_growth),
        ("--interest-rate-1", cli.interest_rate_1),
        ("--interest-rate-2", cli.interest_rate_2),
        ("--alt-return-before-tax", cli.alt_return_before_tax),
    ] {
        if !rate.is_finite() || rate <= -100.0 {
            return Err(ApiError::invalid(name, "must be > -100"));
        }
    }

    for (name, offset) in [
        ("--rent-growth-offset", cli.rent_growth_offset),
        ("--vacancy-offset", cli.vacancy_offset),
        ("--land-growth-offset", cli.land_growth_offset),
        ("--interest-rate-offset", cli.interest_rate_offset),
    ] {
        if !offset.is_finite() || offset < 0.0 {
            return Err(ApiError::invalid(name, "must be >= 0"));
        }
    }

    if cli.investment_horizon_years > MAX_HORIZON_YEARS {
        return Err(ApiError::invalid(
            "--investment-horizon-years",
            format!("must be <= {MAX_HORIZON_YEARS}"),
        ));
    }
    if cli
        .start_year
        .checked_add(cli.investment_horizon_years.max(1) - 1)
        .is_none()
    {
        return Err(ApiError::invalid(
            "--start-year",
            "leaves no room for the investment horizon",
        ));
    }

    if cli.sale_mode == CliSaleMode::Sell && cli.sale_year.is_none() {
        return Err(ApiError::invalid(
            "--sale-year",
            "is required when --sale-mode=sell",
        ));
    }

    let afa_model = AfaModel::from_label(&cli.afa_model);
    if afa_model == AfaModel::Flat2Unbounded {
        tracing::warn!(
            label = %cli.afa_model,
            "unrecognised depreciation model, using flat 2% without end"
        );
    }
    if afa_model == AfaModel::RemainingLife && cli.building_lifetime_years == 0 {
        return Err(ApiError::invalid(
            "--building-lifetime-years",
            "must be > 0 for the remaining-life depreciation model",
        ));
    }

    let inputs = SimulationInputs {
        building_value: cli.building_value,
        land_value: cli.land_value,
        transfer_tax_rate: percent(cli.transfer_tax_rate),
        broker_rate: percent(cli.broker_rate),
        registry_rate: percent(cli.registry_rate),
        notary_rate: percent(cli.notary_rate),
        company_cost: cli.company_cost,
        fitting_up: cli.fitting_up,
        initial_repairs: cli.initial_repairs,
        building_loss_rate: percent(cli.building_loss_rate),
        land_growth_rate: percent(cli.land_growth_rate),
        construction_cost_growth: percent(cli.construction_cost_growth),
        annual_maintenance: cli.annual_maintenance,
        maintenance_growth: percent(cli.maintenance_growth),
        sqm: cli.sqm,
        monthly_rent: cli.monthly_rent,
        vacancy_rate: percent(cli.vacancy_rate),
        rent_growth: percent(cli.rent_growth),
        income_tax_rate: percent(cli.income_tax_rate),
        equity: cli.equity,
        loan_term_years_1: cli.loan_term_years_1,
        interest_rate_1: percent(cli.interest_rate_1),
        discount_rate: percent(cli.discount_rate),
        loan_term_years_2: cli.loan_term_years_2,
        interest_rate_2: percent(cli.interest_rate_2),
        selling_cost_rate: percent(cli.selling_cost_rate),
        sale_mode: cli.sale_mode.into(),
        sale_year: cli.sale_year,
        investment_horizon_years: cli.investment_horizon_years,
        start_year: cli.start_year,
        alt_return_before_tax: percent(cli.alt_return_before_tax),
        alt_tax_rate: percent(cli.alt_tax_rate),
        afa_model,
        building_lifetime_years: cli.building_lifetime_years,
    };

    if inputs.sale_mode == SaleMode::Sell {
        let horizon = inputs.horizon_years() as i64;
        if let Some(year) = inputs.sale_year.filter(|y| !(1..=horizon).contains(&(*y as i64))) {
            tracing::warn!(
                sale_year = year,
                horizon,
                "sale year outside the horizon, the property is held instead"
            );
        }
    }

    Ok(inputs)
}

fn build_offsets(cli: &Cli) -> ScenarioOffsets {
    ScenarioOffsets {
        rent_growth: percent(cli.rent_growth_offset),
        vacancy_rate: percent(cli.vacancy_offset),
        land_growth_rate: percent(cli.land_growth_offset),
        interest_rate: percent(cli.interest_rate_offset),
    }
}

/// Parses command-line flags, runs the projection and renders it as JSON.
///
/// `--help` and `--version` come back as [`ApiError::Cli`] as well.
pub fn run_cli<I, T>(args: I) -> ApiResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let inputs = build_inputs(&cli)?;
    let json = if cli.scenarios {
        let offsets = build_offsets(&cli);
        let scenarios = simulate_scenarios(&inputs, &offsets);
        serde_json::to_string_pretty(&build_scenarios_response(inputs, scenarios))?
    } else {
        let result = simulate(&inputs);
        serde_json::to_string_pretty(&build_simulate_response(inputs, result))?
    };
    Ok(json)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .route(
            "/api/scenarios",
            get(scenarios_get_handler).post(scenarios_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "immo-roi HTTP API listening");
    tracing::info!("Local access: http://127.0.0.1:{port}/api/simulate");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn scenarios_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    scenarios_handler_impl(payload).await
}

async fn scenarios_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    scenarios_handler_impl(payload).await
}

async fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!(error = %err, "rejected simulate request");
            return err.into_response();
        }
    };
    tracing::info!(
        horizon = request.inputs.horizon_years(),
        sale_mode = ?request.inputs.sale_mode,
        "running simulation"
    );

    let result = simulate(&request.inputs);
    json_response(StatusCode::OK, build_simulate_response(request.inputs, result))
}

async fn scenarios_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!(error = %err, "rejected scenarios request");
            return err.into_response();
        }
    };
    tracing::info!(
        horizon = request.inputs.horizon_years(),
        sale_mode = ?request.inputs.sale_mode,
        "running scenario set"
    );

    let scenarios = simulate_scenarios(&request.inputs, &request.offsets);
    json_response(
        StatusCode::OK,
        build_scenarios_response(request.inputs, scenarios),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> ApiResult<ApiRequest> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: SimulatePayload) -> ApiResult<ApiRequest> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.building_value {
        cli.building_value = v;
    }
    if let Some(v) = payload.land_value {
        cli.land_value = v;
    }
    if let Some(v) = payload.transfer_tax_rate {
        cli.transfer_tax_rate = v;
    }
    if let Some(v) = payload.broker_rate {
        cli.broker_rate = v;
    }
    if let Some(v) = payload.registry_rate {
        cli.registry_rate = v;
    }
    if let Some(v) = payload.notary_rate {
        cli.notary_rate = v;
    }
    if let Some(v) = payload.company_cost {
        cli.company_cost = v;
    }
    if let Some(v) = payload.fitting_up {
        cli.fitting_up = v;
    }
    if let Some(v) = payload.initial_repairs {
        cli.initial_repairs = v;
    }

    if let Some(v) = payload.building_loss_rate {
        cli.building_loss_rate = v;
    }
    if let Some(v) = payload.land_growth_rate {
        cli.land_growth_rate = v;
    }
    if let Some(v) = payload.construction_cost_growth {
        cli.construction_cost_growth = v;
    }

    if let Some(v) = payload.annual_maintenance {
        cli.annual_maintenance = v;
    }
    if let Some(v) = payload.maintenance_growth {
        cli.maintenance_growth = v;
    }

    if let Some(v) = payload.sqm {
        cli.sqm = v;
    }
    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v;
    }
    if let Some(v) = payload.vacancy_rate {
        cli.vacancy_rate = v;
    }
    if let Some(v) = payload.rent_growth {
        cli.rent_growth = v;
    }

    if let Some(v) = payload.income_tax_rate {
        cli.income_tax_rate = v;
    }

    if let Some(v) = payload.equity {
        cli.equity = v;
    }
    if let Some(v) = payload.loan_term_years_1 {
        cli.loan_term_years_1 = v;
    }
    if let Some(v) = payload.interest_rate_1 {
        cli.interest_rate_1 = v;
    }
    if let Some(v) = payload.discount_rate {
        cli.discount_rate = v;
    }
    if let Some(v) = payload.loan_term_years_2 {
        cli.loan_term_years_2 = v;
    }
    if let Some(v) = payload.interest_rate_2 {
        cli.interest_rate_2 = v;
    }

    if let Some(v) = payload.selling_cost_rate {
        cli.selling_cost_rate = v;
    }
    if let Some(v) = payload.sale_mode {
        cli.sale_mode = v.into();
    }
    if let Some(v) = payload.sale_year {
        cli.sale_year = Some(v);
    }

    if let Some(v) = payload.investment_horizon_years {
        cli.investment_horizon_years = v;
    }
    if let Some(v) = payload.start_year {
        cli.start_year = v;
    }

    if let Some(v) = payload.alt_return_before_tax {
        cli.alt_return_before_tax = v;
    }
    if let Some(v) = payload.alt_tax_rate {
        cli.alt_tax_rate = v;
    }

    if let Some(v) = payload.afa_model {
        cli.afa_model = v;
    }
    if let Some(v) = payload.building_lifetime_years {
        cli.building_lifetime_years = v;
    }

    if let Some(v) = payload.rent_growth_offset {
        cli.rent_growth_offset = v;
    }
    if let Some(v) = payload.vacancy_offset {
        cli.vacancy_offset = v;
    }
    if let Some(v) = payload.land_growth_offset {
        cli.land_growth_offset = v;
    }
    if let Some(v) = payload.interest_rate_offset {
        cli.interest_rate_offset = v;
    }

    let inputs = build_inputs(&cli)?;
    let offsets = build_offsets(&cli);
    Ok(ApiRequest { inputs, offsets })
}

fn default_cli_for_api() -> Cli {
    Cli {
        building_value: 200_000.0,
        land_value: 80_000.0,
        transfer_tax_rate: 5.0,
        broker_rate: 3.0,
        registry_rate: 0.5,
        notary_rate: 1.5,
        company_cost: 0.0,
        fitting_up: 30_000.0,
        initial_repairs: 5_000.0,
        building_loss_rate: 1.5,
        land_growth_rate: 2.0,
        construction_cost_growth: 1.0,
        annual_maintenance: 1_500.0,
        maintenance_growth: 2.0,
        sqm: 80.0,
        monthly_rent: 1_200.0,
        vacancy_rate: 5.0,
        rent_growth: 1.0,
        income_tax_rate: 30.0,
        equity: 80_000.0,
        loan_term_years_1: 30,
        interest_rate_1: 3.5,
        discount_rate: 0.0,
        loan_term_years_2: 0,
        interest_rate_2: 0.0,
        selling_cost_rate: 6.0,
        sale_mode: CliSaleMode::Hold,
        sale_year: None,
        investment_horizon_years: 30,
        start_year: 2025,
        alt_return_before_tax: 6.0,
        alt_tax_rate: 26.375,
        afa_model: AfaModel::Linear2.label().to_string(),
        building_lifetime_years: 50,
        scenarios: false,
        rent_growth_offset: 0.5,
        vacancy_offset: 2.0,
        land_growth_offset: 0.5,
        interest_rate_offset: 0.5,
    }
}

fn build_simulate_response(inputs: SimulationInputs, result: SimulationResult) -> SimulateResponse {
    SimulateResponse {
        afa_model: inputs.afa_model.label(),
        horizon_years: inputs.horizon_years(),
        inputs,
        result,
    }
}

fn build_scenarios_response(inputs: SimulationInputs, scenarios: ScenarioSet) -> ScenariosResponse {
    ScenariosResponse {
        afa_model: inputs.afa_model.label(),
        horizon_years: inputs.horizon_years(),
        inputs,
        scenarios,
    }
}
