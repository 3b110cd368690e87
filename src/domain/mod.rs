//! Core domain types and logic.

pub mod series;
pub mod momentum;
pub mod decision;
pub mod scheduler;
pub mod position;
pub mod returns;
pub mod evaluate;
pub mod backtest;
pub mod config_validation;
pub mod error;
