//! Unit test harness for stepper-direct.
//!
//! This target organizes unit tests for the configuration layer.

mod config_parsing;
mod config_validation;
