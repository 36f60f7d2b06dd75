//! Configuration loading and management for the Appraisal Engine.
//!
//! This module provides functionality to load scoring configuration from YAML
//! files: the category weights of the performance rating and the rating bands.
//!
//! # Example
//!
//! ```no_run
//! use appraisal_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/appraisal").unwrap();
//! println!("Soft skill weight: {}", config.category_weights().soft_skill);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppraisalConfig, CategoryWeights, RatingKeysConfig, ScoringConfig};
