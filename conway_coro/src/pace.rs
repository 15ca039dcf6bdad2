// pace.rs - Shared simulation pace, the one piece of mutable state in the process

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;

pub const MIN_PACE_MS: u64 = 50;
pub const MAX_PACE_MS: u64 = 5000;
pub const DEFAULT_PACE_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    #[error("Speed must be between 50 and 5000ms")]
    OutOfRange(u64),
    #[error("Speed must be between 50 and 5000ms")]
    NotANumber(String),
}

/// Handle to the process-wide pace. Clones share the same value, and a
/// change is seen by every request that reads it afterwards.
#[derive(Debug, Clone)]
pub struct Pace {
    millis: Arc<AtomicU64>,
}

impl Pace {
    pub fn new(millis: u64) -> Result<Self, PaceError> {
        validate(millis)?;
        Ok(Self { millis: Arc::new(AtomicU64::new(millis)) })
    }

    pub fn millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.millis())
    }

    /// Store `millis` if it lies in `MIN_PACE_MS..=MAX_PACE_MS`. On rejection
    /// the previous value is kept.
    pub fn set(&self, millis: u64) -> Result<u64, PaceError> {
        validate(millis)?;
        self.millis.store(millis, Ordering::Relaxed);
        Ok(millis)
    }
}

impl Default for Pace {
    fn default() -> Self {
        Self { millis: Arc::new(AtomicU64::new(DEFAULT_PACE_MS)) }
    }
}

fn validate(millis: u64) -> Result<(), PaceError> {
    if (MIN_PACE_MS..=MAX_PACE_MS).contains(&millis) {
        Ok(())
    } else {
        Err(PaceError::OutOfRange(millis))
    }
}

/// Parse the raw `speed` form field. Anything that is not a plain integer
/// is rejected the same way as an out-of-range value.
pub fn parse_speed(raw: &str) -> Result<u64, PaceError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| PaceError::NotANumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default() {
        assert_eq!(Pace::default().millis(), 1000);
        assert_eq!(Pace::default().get(), Duration::from_secs(1));
    }

    #[test]
    fn boundaries() {
        let pace = Pace::default();
        assert_eq!(pace.set(49), Err(PaceError::OutOfRange(49)));
        assert_eq!(pace.set(50), Ok(50));
        assert_eq!(pace.set(5000), Ok(5000));
        assert_eq!(pace.set(5001), Err(PaceError::OutOfRange(5001)));
        assert_eq!(pace.millis(), 5000);
    }

    #[test]
    fn rejection_keeps_previous_value() {
        let pace = Pace::new(3000).unwrap();
        assert!(pace.set(0).is_err());
        assert!(pace.set(u64::MAX).is_err());
        assert_eq!(pace.millis(), 3000);
    }

    #[test]
    fn clones_share_the_value() {
        let pace = Pace::default();
        let handle = pace.clone();
        handle.set(250).unwrap();
        assert_eq!(pace.millis(), 250);
    }

    #[test]
    fn new_validates() {
        assert!(Pace::new(10).is_err());
        assert!(Pace::new(50).is_ok());
    }

    #[test]
    fn parse_speed_tokens() {
        assert_eq!(parse_speed("3000"), Ok(3000));
        assert_eq!(parse_speed(" 75 "), Ok(75));
        assert!(parse_speed("fast").is_err());
        assert!(parse_speed("").is_err());
        assert!(parse_speed("-5").is_err());
        assert!(parse_speed("100ms").is_err());
    }

    #[test]
    fn message_is_the_same_for_every_rejection() {
        let expected = "Speed must be between 50 and 5000ms";
        assert_eq!(PaceError::OutOfRange(1).to_string(), expected);
        assert_eq!(PaceError::NotANumber("x".into()).to_string(), expected);
    }
}
