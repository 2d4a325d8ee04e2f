//! HTTP API endpoints

pub mod health;
pub mod log_selection;
pub mod proposals;
pub mod recommendations;
