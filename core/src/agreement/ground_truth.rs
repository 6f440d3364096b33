use crate::error::{EchocatError, Result};
use crate::input::OverreadTable;
use std::collections::BTreeMap;

/// Aggregated ground truth: study -> mean EF over that study's raters
pub type GroundTruthMap = BTreeMap<String, f64>;

/// Reduces multi-rater overreads to one ground-truth EF per study
///
/// The ground truth for a study is the arithmetic mean of all rater
/// readings recorded for it. Every study in the input appears in the
/// output.
///
/// # Errors
///
/// Returns [`EchocatError::EmptyRaterSet`] if a study has no rater
/// readings, since its mean would be undefined.
pub fn aggregate_ground_truth(overreads: &OverreadTable) -> Result<GroundTruthMap> {
    let mut ground_truth = GroundTruthMap::new();

    for (study, readings) in overreads {
        if readings.is_empty() {
            return Err(EchocatError::EmptyRaterSet(study.clone()));
        }
        let total: f64 = readings.values().sum();
        ground_truth.insert(study.clone(), total / readings.len() as f64);
    }

    Ok(ground_truth)
}
