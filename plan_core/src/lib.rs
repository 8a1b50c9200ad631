#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fitplan system.
//!
//! This crate provides:
//! - Domain types (exercises, sessions, plans, profiles)
//! - Catalog management
//! - Weekly plan generation (safety screening, exercise selection, session composition)
//! - Frequency recommendation and nutrition targets
//! - Persistence (profile, completion history)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod safety;
pub mod selector;
pub mod session;
pub mod engine;
pub mod frequency;
pub mod nutrition;
pub mod profile;
pub mod history;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use safety::restricted_regions;
pub use engine::generate_weekly_plan;
pub use frequency::{calculate_recommended_frequency, safety_conflict};
pub use nutrition::calculate_nutrition;
pub use history::{append_record, load_recent, load_records};
