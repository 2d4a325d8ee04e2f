//! # Annotation Gateway Common Library
//!
//! Shared code for the annotation gateway service including:
//! - API request/response types
//! - Configuration loading
//! - Error types

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
