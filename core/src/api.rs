use crate::agreement::{aggregate_ground_truth, select_pairs_for_key, AgreementStats};
use crate::error::Result;
use crate::input::{load_overreads, load_predictions, OverreadTable, PredictionTable};
use crate::types::ViewKey;
use log::info;
use std::path::Path;

/// One completed agreement analysis for a view or view combination
///
/// Holds the resolved display title and the full-precision statistics; the
/// CLI renders this either as a text report or as JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AgreementReport {
    /// The requested view key, e.g. `plax_ef` or `plax_ef,ap4_ef`
    pub view: ViewKey,

    /// Display title for the view key
    pub title: String,

    /// Bland-Altman statistics over the selected pairs
    pub stats: AgreementStats,
}

impl AgreementReport {
    /// Runs the full analysis against the two persisted tables
    ///
    /// # Errors
    ///
    /// Returns an error if either table cannot be loaded, a study has no
    /// raters or no ground truth, or no pair matches the requested view.
    pub fn from_files(
        key: &ViewKey,
        overread_path: &Path,
        prediction_path: &Path,
    ) -> Result<Self> {
        let overreads = load_overreads(overread_path)?;
        let predictions = load_predictions(prediction_path)?;
        Self::compute(key, &overreads, &predictions)
    }

    /// Computes the agreement report from already-loaded tables
    pub fn compute(
        key: &ViewKey,
        overreads: &OverreadTable,
        predictions: &PredictionTable,
    ) -> Result<Self> {
        let ground_truth = aggregate_ground_truth(overreads)?;
        let pairs = select_pairs_for_key(predictions, &ground_truth, key)?;
        let stats = AgreementStats::from_pairs(&pairs)?;

        // Axis sanity diagnostics against the fixed plot ranges.
        let (mean_min, mean_max) = stats.mean_range();
        info!("min mean: {mean_min}");
        info!("max mean: {mean_max}");
        info!("max diff: {}", stats.max_diff());

        Ok(Self {
            view: key.clone(),
            title: key.title().to_string(),
            stats,
        })
    }
}
