//! # Resto Shared
//! 
//! Shared utilities, types, and telemetry for the Resto application.

pub mod constants;
pub mod currency;
pub mod types;
pub mod ingredients;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use currency::format_rupiah;
pub use error::AppError;
