pub mod agreement;
pub mod api;
pub mod cli;
pub mod error;
pub mod input;
pub mod plot;
pub mod types;

pub use agreement::{
    aggregate_ground_truth, round2, select_pairs, select_pairs_for_key, AgreementStats,
    GroundTruthMap, PairedSamples,
};
pub use api::AgreementReport;
pub use cli::report::TextReport;
pub use error::{EchocatError, Result};
pub use input::{load_overreads, load_predictions, OverreadTable, PredictionTable};
pub use plot::render_plot;
pub use types::*;
