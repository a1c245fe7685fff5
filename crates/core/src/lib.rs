//! Core library for actionrepo
//!
//! This crate implements the **Functional Core** of the actionrepo sample application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`actionrepo_core`** (this crate): Validation, formatting and statistics helpers
//! - **`actionrepo`**: Argument parsing, stdin/stdout and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! Functions in this crate take their inputs explicitly and return values. There are
//! two deliberate exceptions:
//!
//! - [`report::current_timestamp`] reads the system clock
//! - [`report::log_event`] writes to a caller-supplied [`std::io::Write`] sink
//!
//! Both have deterministic counterparts ([`report::format_timestamp`],
//! [`report::log_line_at`]) so tests never depend on the wall clock or on stdout.
//!
//! # Module Organization
//!
//! - [`validate`]: Name validation (the Validator)
//! - [`report`]: Timestamps, message formatting and event logging (the Reporter)
//! - [`stats`]: Count/sum/average/min/max summaries over numeric slices
//! - [`transform`]: Upper-case transformation over dynamic values
//! - [`value`]: Parsing command-line tokens into dynamic values
//! - [`config`]: The static application configuration table
//! - [`greeting`]: Text printed by the interactive entry point
//!
//! # Example Usage
//!
//! ```rust
//! use actionrepo_core::{report, stats, validate};
//!
//! assert!(validate::is_valid_name_str("Dr. Johnson"));
//!
//! let summary = stats::summarize(&[1i32, 2, 3, 4, 5]).unwrap();
//! assert_eq!(summary.sum, 15);
//! assert_eq!(summary.average, 3.0);
//!
//! let mut sink: Vec<u8> = Vec::new();
//! let line = report::log_event(&mut sink, "deploy", "done").unwrap();
//! assert!(line.contains("DEPLOY: done"));
//! ```

pub mod config;
pub mod greeting;
pub mod report;
pub mod stats;
pub mod transform;
pub mod validate;
pub mod value;
