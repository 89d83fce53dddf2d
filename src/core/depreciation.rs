use super::types::AfaModel;

impl AfaModel {
    pub const ALL: [AfaModel; 6] = [
        AfaModel::Linear2,
        AfaModel::Linear3,
        AfaModel::Degressive5ThenLinear2,
        AfaModel::Degressive5ThenLinear3,
        AfaModel::RemainingLife,
        AfaModel::Flat2Unbounded,
    ];

    /// Maps a free-text model label onto a policy. Unknown labels select
    /// [`AfaModel::Flat2Unbounded`].
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '%' && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "linear2" => AfaModel::Linear2,
            "linear3" => AfaModel::Linear3,
            "degressive5+linear2" | "degressive5thenlinear2" => AfaModel::Degressive5ThenLinear2,
            "degressive5+linear3" | "degressive5thenlinear3" => AfaModel::Degressive5ThenLinear3,
            "linear1/remaininglife" | "remaininglife" => AfaModel::RemainingLife,
            _ => AfaModel::Flat2Unbounded,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AfaModel::Linear2 => "Linear 2%",
            AfaModel::Linear3 => "Linear 3%",
            AfaModel::Degressive5ThenLinear2 => "Degressive 5%+Linear 2%",
            AfaModel::Degressive5ThenLinear3 => "Degressive 5%+Linear 3%",
            AfaModel::RemainingLife => "Linear 1/remaining-life",
            AfaModel::Flat2Unbounded => "Flat 2% (unbounded)",
        }
    }

    /// Share of the depreciation basis written off in `year` (1-based).
    pub fn rate(self, year: u32, lifetime_years: u32) -> f64 {
        match self {
            AfaModel::Linear2 => linear(0.02, 50, year),
            AfaModel::Linear3 => linear(0.03, 33, year),
            AfaModel::Degressive5ThenLinear2 => degressive_then_linear(0.02, year),
            AfaModel::Degressive5ThenLinear3 => degressive_then_linear(0.03, year),
            AfaModel::RemainingLife => {
                if lifetime_years == 0 {
                    0.0
                } else {
                    linear(1.0 / lifetime_years as f64, lifetime_years, year)
                }
            }
            AfaModel::Flat2Unbounded => 0.02,
        }
    }
}

fn linear(rate: f64, years: u32, year: u32) -> f64 {
    if (1..=years).contains(&year) { rate } else { 0.0 }
}

fn degressive_then_linear(tail_rate: f64, year: u32) -> f64 {
    if year <= 6 { 0.05 } else { tail_rate }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_models_expire_after_their_period() {
        assert_eq!(AfaModel::Linear2.rate(1, 0), 0.02);
        assert_eq!(AfaModel::Linear2.rate(50, 0), 0.02);
        assert_eq!(AfaModel::Linear2.rate(51, 0), 0.0);
        assert_eq!(AfaModel::Linear3.rate(33, 0), 0.03);
        assert_eq!(AfaModel::Linear3.rate(34, 0), 0.0);
    }

    #[test]
    fn degressive_models_switch_after_year_six_and_never_expire() {
        assert_eq!(AfaModel::Degressive5ThenLinear2.rate(6, 0), 0.05);
        assert_eq!(AfaModel::Degressive5ThenLinear2.rate(7, 0), 0.02);
        assert_eq!(AfaModel::Degressive5ThenLinear2.rate(200, 0), 0.02);
        assert_eq!(AfaModel::Degressive5ThenLinear3.rate(1, 0), 0.05);
        assert_eq!(AfaModel::Degressive5ThenLinear3.rate(80, 0), 0.03);
    }

    #[test]
    fn remaining_life_spreads_basis_over_lifetime() {
        assert_eq!(AfaModel::RemainingLife.rate(1, 40), 1.0 / 40.0);
        assert_eq!(AfaModel::RemainingLife.rate(40, 40), 1.0 / 40.0);
        assert_eq!(AfaModel::RemainingLife.rate(41, 40), 0.0);
        assert_eq!(AfaModel::RemainingLife.rate(1, 0), 0.0);
    }

    #[test]
    fn remaining_life_writes_off_full_basis() {
        let total: f64 = (1..=60).map(|y| AfaModel::RemainingLife.rate(y, 25)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_labels_fall_back_to_unbounded_two_percent() {
        let model = AfaModel::from_label("Sonder-AfA 7b");
        assert_eq!(model, AfaModel::Flat2Unbounded);
        assert_eq!(model.rate(120, 0), 0.02);
    }

    #[test]
    fn labels_round_trip_through_parser() {
        for model in AfaModel::ALL
            .into_iter()
            .filter(|m| *m != AfaModel::Flat2Unbounded)
        {
            assert_eq!(AfaModel::from_label(model.label()), model);
        }
        assert_eq!(AfaModel::from_label("linear-2"), AfaModel::Linear2);
        assert_eq!(
            AfaModel::from_label("Degressive 5% + Linear 3%"),
            AfaModel::Degressive5ThenLinear3
        );
    }
}
