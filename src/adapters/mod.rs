//! Adapters - Implementations of the ports against real infrastructure.

pub mod access;
pub mod ai;
pub mod document;
pub mod drive;
pub mod http;
