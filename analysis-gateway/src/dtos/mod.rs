pub mod analysis;

pub use analysis::{AnalysisResult, Issue};
