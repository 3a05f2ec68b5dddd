//! Bookscribe - Book Summary Generation Service
//!
//! This crate turns a book title and reader notes into an LLM-generated
//! summary, renders the summary as a structured Word document, and uploads
//! the document to Google Drive.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
