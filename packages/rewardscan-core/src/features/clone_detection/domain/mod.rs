//! Plagiarism detection domain models

mod comparison_options;
mod match_record;
mod similarity;
mod similarity_outcome;

pub use comparison_options::{ComparisonOptions, TextualFallback};
pub use match_record::{MatchMethod, MatchRecord};
pub use similarity::{
    dice_percentage, ratcliff_obershelp_ratio, ratcliff_obershelp_ratio_with, text_ratio,
    AUTOJUNK_MIN_LEN,
};
pub use similarity_outcome::{ParseSide, SimilarityOutcome};
