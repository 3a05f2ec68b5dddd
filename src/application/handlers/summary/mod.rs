//! Summary generation use case.

mod generate_summary;

pub use generate_summary::{
    DeliveryOptions, GenerateSummaryCommand, GenerateSummaryError, GenerateSummaryHandler,
    GenerateSummaryResult,
};
