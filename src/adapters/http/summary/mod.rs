//! HTTP surface for summary generation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SummaryAppState;
pub use routes::summary_routes;
