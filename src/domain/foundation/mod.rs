//! Foundation - shared value objects and error types for the domain layer.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::SubmissionId;
