use super::types::LoanPhase;

pub(crate) const DEBT_EPS: f64 = 1e-6;
const RATE_EPS: f64 = 1e-9;

/// Fixed annual payment that amortizes `principal` over `periods` years.
///
/// Falls back to straight-line repayment for a zero rate. A zero-length term
/// has no payment.
pub fn annuity_payment(principal: f64, rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    let n = periods as f64;
    if rate.abs() < RATE_EPS {
        return principal / n;
    }
    principal * rate / (1.0 - (1.0 + rate).powf(-n))
}

/// Loan terms fixed for the whole run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoanSchedule {
    pub annuity_1: f64,
    pub rate_1: f64,
    pub term_1: u32,
    pub rate_2: f64,
    pub term_2: u32,
}

impl LoanSchedule {
    pub(crate) fn new(
        loan_amount: f64,
        rate_1: f64,
        term_1: u32,
        rate_2: f64,
        term_2: u32,
    ) -> Self {
        Self {
            annuity_1: annuity_payment(loan_amount, rate_1, term_1),
            rate_1,
            term_1,
            rate_2,
            term_2,
        }
    }

    fn final_year(&self) -> u32 {
        self.term_1.saturating_add(self.term_2)
    }

    fn refinance(&self, year: u32, remaining_debt: f64) -> Phase {
        if self.term_2 > 0 && year <= self.final_year() && remaining_debt > DEBT_EPS {
            let annuity = annuity_payment(remaining_debt, self.rate_2, self.term_2);
            tracing::debug!(year, remaining_debt, annuity, "entering refinancing phase");
            Phase::Loan2Active { annuity }
        } else {
            Phase::Repaid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Loan1Active,
    Loan2Active { annuity: f64 },
    Repaid,
}

impl Phase {
    fn label(self) -> LoanPhase {
        match self {
            Phase::Loan1Active => LoanPhase::Loan1Active,
            Phase::Loan2Active { .. } => LoanPhase::Loan2Active,
            Phase::Repaid => LoanPhase::Repaid,
        }
    }
}

/// Debt service of a single year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LoanYear {
    pub phase: LoanPhase,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
}

/// Running loan balance threaded from one year to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LoanState {
    phase: Phase,
    pub remaining_debt: f64,
    pub cumulative_principal: f64,
}

impl LoanState {
    pub(crate) fn open(loan_amount: f64) -> Self {
        Self {
            phase: Phase::Loan1Active,
            remaining_debt: loan_amount,
            cumulative_principal: 0.0,
        }
    }

    /// Annuity of the refinancing phase, once it has been entered.
    pub(crate) fn refinancing_annuity(&self) -> Option<f64> {
        match self.phase {
            Phase::Loan2Active { annuity } => Some(annuity),
            _ => None,
        }
    }

    pub(crate) fn advance(self, schedule: &LoanSchedule, year: u32) -> (Self, LoanYear) {
        let has_debt = self.remaining_debt > DEBT_EPS;
        let phase = match self.phase {
            Phase::Loan1Active if year <= schedule.term_1 && has_debt => Phase::Loan1Active,
            Phase::Loan1Active => schedule.refinance(year, self.remaining_debt),
            Phase::Loan2Active { annuity } if year <= schedule.final_year() && has_debt => {
                Phase::Loan2Active { annuity }
            }
            Phase::Loan2Active { .. } | Phase::Repaid => Phase::Repaid,
        };

        let (payment, rate) = match phase {
            Phase::Loan1Active => (schedule.annuity_1, schedule.rate_1),
            Phase::Loan2Active { annuity } => (annuity, schedule.rate_2),
            Phase::Repaid => {
                let next = Self { phase, ..self };
                return (
                    next,
                    LoanYear {
                        phase: phase.label(),
                        payment: 0.0,
                        interest: 0.0,
                        principal: 0.0,
                    },
                );
            }
        };

        let interest = self.remaining_debt * rate;
        let principal = (payment - interest).min(self.remaining_debt);
        let next = Self {
            phase,
            remaining_debt: self.remaining_debt - principal,
            cumulative_principal: self.cumulative_principal + principal,
        };
        (
            next,
            LoanYear {
                phase: phase.label(),
                payment,
                interest,
                principal,
            },
        )
    }

    /// Pays off the outstanding balance in full, returning the amount repaid.
    pub(crate) fn settle(self) -> (Self, f64) {
        let repaid = self.remaining_debt;
        let next = Self {
            phase: Phase::Repaid,
            remaining_debt: 0.0,
            ..self
        };
        (next, repaid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn run(loan_amount: f64, schedule: &LoanSchedule, years: u32) -> (LoanState, Vec<LoanYear>) {
        let mut state = LoanState::open(loan_amount);
        let mut rows = Vec::new();
        for year in 1..=years {
            let (next, row) = state.advance(schedule, year);
            state = next;
            rows.push(row);
        }
        (state, rows)
    }

    #[test]
    fn annuity_payment_is_straight_line_for_zero_rate() {
        assert_approx(annuity_payment(120_000.0, 0.0, 10), 12_000.0);
    }

    #[test]
    fn annuity_payment_matches_closed_form() {
        let expected = 100_000.0 * 0.05 / (1.0 - 1.05_f64.powf(-20.0));
        assert_approx(annuity_payment(100_000.0, 0.05, 20), expected);
    }

    #[test]
    fn annuity_payment_is_zero_without_term() {
        assert_approx(annuity_payment(100_000.0, 0.05, 0), 0.0);
    }

    #[test]
    fn zero_rate_loan_reaches_exactly_zero_after_term() {
        let schedule = LoanSchedule::new(120_000.0, 0.0, 10, 0.0, 0);
        let (state, rows) = run(120_000.0, &schedule, 12);

        assert_eq!(state.remaining_debt, 0.0);
        assert!(rows[..10].iter().all(|row| row.phase == LoanPhase::Loan1Active));
        assert!(rows[10..].iter().all(|row| row.phase == LoanPhase::Repaid));
        assert_approx(rows[11].payment, 0.0);
    }

    #[test]
    fn residual_balance_is_refinanced_once_with_fixed_annuity() {
        let schedule = LoanSchedule::new(200_000.0, 0.04, 30, 0.05, 10);
        let mut state = LoanState::open(200_000.0);
        // Pretend only ten years were agreed for the first loan.
        let schedule = LoanSchedule {
            term_1: 10,
            ..schedule
        };

        let mut residual = 0.0;
        let mut loan2_payments = Vec::new();
        for year in 1..=20 {
            if year == 11 {
                residual = state.remaining_debt;
            }
            let (next, row) = state.advance(&schedule, year);
            state = next;
            if year > 10 {
                assert_eq!(row.phase, LoanPhase::Loan2Active);
                loan2_payments.push(row.payment);
            }
        }

        let expected = annuity_payment(residual, 0.05, 10);
        assert!(residual > 0.0);
        assert!(loan2_payments.iter().all(|p| (p - expected).abs() <= EPS));
        assert_eq!(state.refinancing_annuity(), Some(expected));
        assert!(state.remaining_debt.abs() < 1e-4);
    }

    #[test]
    fn no_refinancing_leaves_residual_untouched() {
        let schedule = LoanSchedule {
            annuity_1: 5_000.0,
            rate_1: 0.03,
            term_1: 5,
            rate_2: 0.0,
            term_2: 0,
        };
        let (state, rows) = run(100_000.0, &schedule, 8);

        assert!(state.remaining_debt > 80_000.0);
        assert!(rows[5..].iter().all(|row| row.phase == LoanPhase::Repaid
            && row.interest == 0.0
            && row.principal == 0.0));
    }

    #[test]
    fn settle_clears_debt_and_stops_payments() {
        let schedule = LoanSchedule::new(100_000.0, 0.03, 20, 0.0, 0);
        let (state, _) = run(100_000.0, &schedule, 3);
        let before = state.remaining_debt;

        let (settled, repaid) = state.settle();
        assert_approx(repaid, before);
        assert_eq!(settled.remaining_debt, 0.0);
        assert_approx(settled.cumulative_principal, state.cumulative_principal);

        let (_, row) = settled.advance(&schedule, 4);
        assert_eq!(row.phase, LoanPhase::Repaid);
        assert_approx(row.payment, 0.0);
    }

    #[test]
    fn negative_loan_amount_never_services_debt() {
        let schedule = LoanSchedule::new(-10_000.0, 0.03, 20, 0.04, 10);
        let (state, rows) = run(-10_000.0, &schedule, 5);

        assert!(rows.iter().all(|row| row.phase == LoanPhase::Repaid));
        assert_approx(state.remaining_debt, -10_000.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_principal_sums_to_loan_amount_within_term(
            loan in 1_000u32..2_000_000,
            rate_bp in 0u32..1200,
            term in 1u32..41
        ) {
            let loan_amount = loan as f64;
            let rate = rate_bp as f64 / 10_000.0;
            let schedule = LoanSchedule::new(loan_amount, rate, term, 0.0, 0);
            let (state, rows) = run(loan_amount, &schedule, term);

            let repaid: f64 = rows.iter().map(|row| row.principal).sum();
            prop_assert!((repaid - loan_amount).abs() <= 1e-6 * loan_amount.max(1.0));
            prop_assert!((state.cumulative_principal - repaid).abs() <= 1e-6);
            prop_assert!(state.remaining_debt.abs() <= 1e-6 * loan_amount.max(1.0));
        }

        #[test]
        fn prop_remaining_debt_never_increases_for_positive_annuity(
            loan in 1_000u32..2_000_000,
            rate_1_bp in 0u32..1200,
            rate_2_bp in 0u32..1200,
            term_1 in 1u32..20,
            term_2 in 0u32..20
        ) {
            let loan_amount = loan as f64;
            let schedule = LoanSchedule::new(
                loan_amount,
                rate_1_bp as f64 / 10_000.0,
                term_1,
                rate_2_bp as f64 / 10_000.0,
                term_2,
            );
            let mut state = LoanState::open(loan_amount);
            for year in 1..=(term_1 + term_2 + 3) {
                let before = state.remaining_debt;
                let (next, row) = state.advance(&schedule, year);
                prop_assert!(next.remaining_debt <= before + 1e-9);
                prop_assert!(row.principal >= -1e-9);
                state = next;
            }
        }
    }
}
