//! Unit test harness for blinds-motion.
//!
//! This module organizes unit tests for each component of the library.

#[path = "unit/config_parsing.rs"]
mod config_parsing;
#[path = "unit/config_validation.rs"]
mod config_validation;
#[path = "unit/properties.rs"]
mod properties;
