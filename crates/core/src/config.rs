//! Engine configuration.

use std::time::Duration;

use thiserror::Error;

use crate::types::{
    BOARD_COLUMNS, BOARD_ROWS, GRAVITY_INTERVAL_MS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least {min} rows, got {rows}")]
    TooFewRows { rows: u16, min: u16 },
    #[error("board needs at least {min} columns, got {columns}")]
    TooFewColumns { columns: u16, min: u16 },
    #[error("board allows at most {max} rows, got {rows}")]
    TooManyRows { rows: u16, max: u16 },
    #[error("board allows at most {max} columns, got {columns}")]
    TooManyColumns { columns: u16, max: u16 },
    #[error("gravity interval must be greater than zero")]
    ZeroGravityInterval,
}

/// Board size, gravity period and shape seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: u16,
    pub columns: u16,
    pub gravity_interval_ms: u32,
    /// `None` lets the embedder pick one (e.g. from the clock).
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            columns: BOARD_COLUMNS,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS {
            return Err(ConfigError::TooFewRows {
                rows: self.rows,
                min: MIN_ROWS,
            });
        }
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooFewColumns {
                columns: self.columns,
                min: MIN_COLUMNS,
            });
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns {
                columns: self.columns,
                max: MAX_COLUMNS,
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        Ok(())
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_interval_ms as u64)
    }
}
