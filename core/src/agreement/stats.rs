use crate::agreement::pairs::PairedSamples;
use crate::error::{EchocatError, Result};

/// Half-width of the limits of agreement in standard deviations (95%
/// interval under a normality assumption)
const LIMIT_FACTOR: f64 = 1.96;

/// Rounds a value to 2 decimal places for display
///
/// Display-side only; computed statistics are kept at full precision.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Bland-Altman agreement statistics over one set of paired samples
///
/// `bias`, `sd` and the limits are stored at full precision; rounding
/// happens only when formatting for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AgreementStats {
    /// Number of paired samples
    pub n: usize,

    /// Mean of the per-sample differences (predicted - reference)
    pub bias: f64,

    /// Population standard deviation of the differences (divide by n)
    pub sd: f64,

    /// bias - 1.96 * sd
    pub lower_limit: f64,

    /// bias + 1.96 * sd
    pub upper_limit: f64,

    /// Per-sample means, (predicted + reference) / 2
    #[serde(skip)]
    pub means: Vec<f64>,

    /// Per-sample differences, predicted - reference
    #[serde(skip)]
    pub diffs: Vec<f64>,
}

impl AgreementStats {
    /// Computes agreement statistics from aligned paired samples
    ///
    /// # Errors
    ///
    /// Returns [`EchocatError::EmptySampleSet`] if there are no pairs,
    /// since bias and SD would be undefined.
    pub fn from_pairs(pairs: &PairedSamples) -> Result<Self> {
        if pairs.is_empty() {
            return Err(EchocatError::EmptySampleSet);
        }
        let n = pairs.len();

        let mut means = Vec::with_capacity(n);
        let mut diffs = Vec::with_capacity(n);
        for (&predicted, &reference) in pairs.predicted.iter().zip(&pairs.reference) {
            means.push((predicted + reference) / 2.0);
            diffs.push(predicted - reference);
        }

        let bias = diffs.iter().sum::<f64>() / n as f64;
        let variance = diffs.iter().map(|d| (d - bias) * (d - bias)).sum::<f64>() / n as f64;
        let sd = variance.sqrt();

        Ok(Self {
            n,
            bias,
            sd,
            lower_limit: bias - LIMIT_FACTOR * sd,
            upper_limit: bias + LIMIT_FACTOR * sd,
            means,
            diffs,
        })
    }

    /// Returns (min, max) of the per-sample means
    ///
    /// Used to sanity-check the fixed x-axis range of the plot.
    pub fn mean_range(&self) -> (f64, f64) {
        let min = self.means.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// Returns the largest per-sample difference
    pub fn max_diff(&self) -> f64 {
        self.diffs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Formats the bias and limits line shown on the plot and in reports
    pub fn summary_line(&self) -> String {
        format!(
            "Bias = {:.2}, Limits of agreement = [{:.2}, {:.2}]",
            round2(self.bias),
            round2(self.lower_limit),
            round2(self.upper_limit)
        )
    }
}
