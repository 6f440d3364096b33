//! Agreement analysis between predicted and reference EF readings
//!
//! Covers the three computation steps of one analysis run: aggregating
//! multi-rater overreads into per-study ground truth, selecting aligned
//! (prediction, reference) pairs for a view, and computing Bland-Altman
//! statistics over the pairs.

mod ground_truth;
mod pairs;
mod stats;

pub use ground_truth::{aggregate_ground_truth, GroundTruthMap};
pub use pairs::{select_pairs, select_pairs_for_key, PairedSamples};
pub use stats::{round2, AgreementStats};
