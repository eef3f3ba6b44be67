//! Plagiarism Detection Application Layer (UseCase)

mod plagiarism_usecase;

pub use plagiarism_usecase::{
    ComparisonInput, ComparisonOutput, ComparisonStats, PlagiarismUseCase, PlagiarismUseCaseImpl,
};
