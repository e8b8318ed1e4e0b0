//! Shared types, errors, and configuration for Tallyboard.
//!
//! This crate provides common types used across all other crates:
//! - Money formatting with decimal precision
//! - Typed session IDs
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalysisConfig, AppConfig, CacheConfig, EffortConfig, ServerConfig};
pub use error::AppError;
