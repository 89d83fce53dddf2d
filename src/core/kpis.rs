use super::types::{Kpis, SimulationInputs, YearRecord};

const EQUITY_EPS: f64 = 1e-9;

fn per_equity(value: f64, equity: f64) -> f64 {
    if equity.abs() < EQUITY_EPS {
        0.0
    } else {
        value / equity
    }
}

/// Reduces the year ledger to return metrics and the benchmark comparison.
pub(crate) fn aggregate_kpis(
    inputs: &SimulationInputs,
    years: &[YearRecord],
    sold_in: Option<u32>,
    horizon: u32,
) -> Kpis {
    let equity = inputs.equity;
    let years_used = sold_in.map_or(horizon, |year| year.min(horizon));

    let total_profit = years.last().map_or(0.0, |r| r.equity_position);
    let roe_total = per_equity(total_profit, equity);
    let roe_annualized = if equity.abs() < EQUITY_EPS || years_used == 0 {
        0.0
    } else {
        annualize(roe_total, years_used)
    };
    let equity_multiple = per_equity(equity + total_profit, equity);
    let cash_on_cash_year1 = per_equity(years.first().map_or(0.0, |r| r.cash_after_tax), equity);

    let alt_after_tax_return = inputs.alt_return_before_tax * (1.0 - inputs.alt_tax_rate);
    let alt_end_value = equity * (1.0 + alt_after_tax_return).powi(years_used as i32);
    let alt_profit = alt_end_value - equity;

    Kpis {
        years_used,
        sale_year: sold_in,
        total_profit,
        roe_total,
        roe_annualized,
        equity_multiple,
        cash_on_cash_year1,
        alt_after_tax_return,
        alt_end_value,
        alt_profit,
        excess_profit_vs_alt: total_profit - alt_profit,
    }
}

/// Geometric per-year return. Over several years, losing the whole stake or
/// more reads as -100% per year.
fn annualize(total_return: f64, years: u32) -> f64 {
    if years == 1 {
        return total_return;
    }
    let growth = 1.0 + total_return;
    if growth <= 0.0 {
        return -1.0;
    }
    growth.powf(1.0 / years as f64) - 1.0
}
