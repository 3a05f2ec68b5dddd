//! HTTP adapters - Axum routes, handlers and DTOs per feature.

pub mod summary;
