//! Session configuration.

use crate::error::{Result, SessionError};

/// Tunables for the cooperative tick schedulers.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Keyframes inserted per target curve per timer tick during a paste.
    pub chunk_size: usize,
    /// Timer ticks between bakes in a batch run.
    pub tick_throttle: usize,
    /// Periodic timer interval in seconds.
    pub timer_interval: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chunk_size: 30,
            tick_throttle: 30,
            timer_interval: 0.002,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SessionError::InvalidConfig(
                "chunk_size must be nonzero".into(),
            ));
        }
        if self.tick_throttle == 0 {
            return Err(SessionError::InvalidConfig(
                "tick_throttle must be nonzero".into(),
            ));
        }
        if !(self.timer_interval > 0.0) {
            return Err(SessionError::InvalidConfig(format!(
                "timer_interval {} must be positive",
                self.timer_interval
            )));
        }
        Ok(())
    }
}
