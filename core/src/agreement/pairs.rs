use crate::agreement::ground_truth::GroundTruthMap;
use crate::error::{EchocatError, Result};
use crate::input::PredictionTable;
use crate::types::{View, ViewKey};

/// Order-aligned (predicted, reference) EF sequences for one view selection
///
/// `predicted[i]` and `reference[i]` always belong to the same study; the
/// two vectors have equal length by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairedSamples {
    pub predicted: Vec<f64>,
    pub reference: Vec<f64>,
}

impl PairedSamples {
    /// Returns the number of paired samples
    pub fn len(&self) -> usize {
        self.predicted.len()
    }

    /// Returns whether no study matched the selection
    pub fn is_empty(&self) -> bool {
        self.predicted.is_empty()
    }

    fn push(&mut self, predicted: f64, reference: f64) {
        self.predicted.push(predicted);
        self.reference.push(reference);
    }

    fn append(&mut self, mut other: PairedSamples) {
        self.predicted.append(&mut other.predicted);
        self.reference.append(&mut other.reference);
    }
}

/// Selects aligned (prediction, ground truth) pairs for one elementary view
///
/// Studies are visited in the prediction table's sorted order. A study is
/// included iff it has a prediction recorded under the given view's key.
///
/// # Errors
///
/// Returns [`EchocatError::MissingGroundTruth`] if an included study has no
/// entry in the ground-truth map. Skipping such studies silently would bias
/// the agreement statistics without a trace.
pub fn select_pairs(
    predictions: &PredictionTable,
    ground_truth: &GroundTruthMap,
    view: View,
) -> Result<PairedSamples> {
    let mut pairs = PairedSamples::default();

    for (study, views) in predictions {
        let Some(&predicted) = views.get(view.key()) else {
            continue;
        };
        let Some(&reference) = ground_truth.get(study) else {
            return Err(EchocatError::MissingGroundTruth(study.clone()));
        };
        pairs.push(predicted, reference);
    }

    Ok(pairs)
}

/// Selects pairs for a view key, expanding combinations per member view
///
/// A combination key is evaluated by selecting pairs for each member view
/// in canonical order and concatenating the results, so a study with
/// predictions under several of the requested views contributes one pair
/// per view.
pub fn select_pairs_for_key(
    predictions: &PredictionTable,
    ground_truth: &GroundTruthMap,
    key: &ViewKey,
) -> Result<PairedSamples> {
    let mut pairs = PairedSamples::default();
    for view in key.views() {
        pairs.append(select_pairs(predictions, ground_truth, *view)?);
    }
    Ok(pairs)
}
