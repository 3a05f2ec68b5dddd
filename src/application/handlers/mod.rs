//! Command handlers, one module per feature.

pub mod summary;
