//! Configuration validation.
//!
//! Validates all config fields before the backtest runs.

use crate::domain::error::MomrotError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

/// Evaluation start used when the config does not name one.
pub const DEFAULT_EVAL_START: NaiveDate = match NaiveDate::from_ymd_opt(2014, 2, 10) {
    Some(d) => d,
    None => panic!("valid date literal"),
};

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), MomrotError> {
    validate_prices_path(config)?;
    validate_lookback(config)?;
    validate_rebalance_gap(config)?;
    validate_fee_rate(config, "purchase_rate")?;
    validate_fee_rate(config, "sell_rate")?;
    validate_eval_start(config)?;
    Ok(())
}

fn validate_prices_path(config: &dyn ConfigPort) -> Result<(), MomrotError> {
    match config.get_string("data", "prices") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(MomrotError::ConfigMissing {
            section: "data".to_string(),
            key: "prices".to_string(),
        }),
    }
}

fn validate_lookback(config: &dyn ConfigPort) -> Result<(), MomrotError> {
    let value = config.get_int("strategy", "lookback", 20);
    if value < 1 {
        return Err(MomrotError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "lookback".to_string(),
            reason: "lookback must be a positive number of trading days".to_string(),
        });
    }
    Ok(())
}

fn validate_rebalance_gap(config: &dyn ConfigPort) -> Result<(), MomrotError> {
    let value = config.get_int("strategy", "rebalance_gap", 10);
    if value < 1 {
        return Err(MomrotError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "rebalance_gap".to_string(),
            reason: "rebalance_gap must be a positive number of trading days".to_string(),
        });
    }
    Ok(())
}

fn validate_fee_rate(config: &dyn ConfigPort, key: &str) -> Result<(), MomrotError> {
    let value = config.get_double("fees", key, 0.0);
    if !(0.0..1.0).contains(&value) {
        return Err(MomrotError::ConfigInvalid {
            section: "fees".to_string(),
            key: key.to_string(),
            reason: format!("{key} must be a fraction in [0, 1)"),
        });
    }
    Ok(())
}

fn validate_eval_start(config: &dyn ConfigPort) -> Result<(), MomrotError> {
    match config.get_string("evaluation", "start_date") {
        None => Ok(()),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map(|_| ()).map_err(|_| {
            MomrotError::ConfigInvalid {
                section: "evaluation".to_string(),
                key: "start_date".to_string(),
                reason: "invalid start_date format, expected YYYY-MM-DD".to_string(),
            }
        }),
    }
}
