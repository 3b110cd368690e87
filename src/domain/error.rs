//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for momrot.
#[derive(Debug, thiserror::Error)]
pub enum MomrotError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid price series: {reason}")]
    InvalidSeries { reason: String },

    #[error("insufficient data: have {rows} rows, need at least {minimum}")]
    InsufficientData { rows: usize, minimum: usize },

    #[error("ambiguous initial decision on {date}: momenta are exactly equal")]
    AmbiguousInitialDecision { date: NaiveDate },

    #[error("empty evaluation window: no trading days on or after {start}")]
    EmptyWindow { start: NaiveDate },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MomrotError> for std::process::ExitCode {
    fn from(err: &MomrotError) -> Self {
        let code: u8 = match err {
            MomrotError::Io(_) => 1,
            MomrotError::ConfigParse { .. }
            | MomrotError::ConfigMissing { .. }
            | MomrotError::ConfigInvalid { .. } => 2,
            MomrotError::Data { .. }
            | MomrotError::InvalidSeries { .. }
            | MomrotError::InsufficientData { .. } => 3,
            MomrotError::AmbiguousInitialDecision { .. } => 4,
            MomrotError::EmptyWindow { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
