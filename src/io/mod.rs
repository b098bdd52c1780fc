pub mod prompt;
pub mod reporting;
