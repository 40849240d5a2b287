//! Salary estimates from a single-feature least-squares line over a fixed reference table.
//!
//! The model is fitted once at startup and carried in `AppState`; predictions
//! never fail, they fall back to `FALLBACK_RANGE` on any numeric problem.

use tracing::warn;

/// (years of experience, salary in LPA) reference points.
pub const REFERENCE_TABLE: [(f64, f64); 8] = [
    (0.0, 4.0),
    (1.0, 5.5),
    (2.0, 7.0),
    (3.0, 9.5),
    (4.0, 12.0),
    (5.0, 15.0),
    (8.0, 24.0),
    (10.0, 30.0),
];

pub const FALLBACK_RANGE: &str = "₹5.0 - 10.0 LPA";

/// Width of the quoted range above the point estimate, in LPA.
const RANGE_SPREAD_LPA: f64 = 2.5;

// ────────────────────────────────────────────────────────────────────────────
// Linear fit
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Ordinary least squares. `None` for fewer than two points, zero variance
    /// in x, or non-finite parameters.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        (slope.is_finite() && intercept.is_finite()).then_some(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Estimator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SalaryEstimator {
    fit: Option<LinearFit>,
}

impl SalaryEstimator {
    pub fn from_table(points: &[(f64, f64)]) -> Self {
        let fit = LinearFit::fit(points);
        if fit.is_none() {
            warn!(
                "Salary model could not be fitted from {} points; every estimate will be '{FALLBACK_RANGE}'",
                points.len()
            );
        }
        Self { fit }
    }

    pub fn reference() -> Self {
        Self::from_table(&REFERENCE_TABLE)
    }

    pub fn fit(&self) -> Option<LinearFit> {
        self.fit
    }

    /// Returns `"₹<point> - <point + 2.5> LPA"`, point rounded to one decimal.
    /// Inputs are not clamped; negative or large values extrapolate.
    pub fn predict_salary(&self, years_experience: f64) -> String {
        let Some(fit) = self.fit else {
            return FALLBACK_RANGE.to_string();
        };

        let point = round_one_decimal(fit.predict(years_experience));
        if !point.is_finite() {
            warn!("Salary prediction for {years_experience} years is not finite; using fallback");
            return FALLBACK_RANGE.to_string();
        }

        format!("₹{point:.1} - {:.1} LPA", point + RANGE_SPREAD_LPA)
    }
}

/// Rounds from the exact binary value by going through the decimal formatter.
/// `(v * 10.0).round()` would round 28.149999... up.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(f64::NAN)
}
