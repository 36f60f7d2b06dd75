//! Performance Appraisal and Bonus Allocation Engine
//!
//! This crate aggregates strategic-objective achievements and soft-skill ratings
//! into a performance rating per employee, and distributes a bonus pool across an
//! organization proportionally to salary and performance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
