#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::Duration;

use crate::auxiliary::error::{LifeError, LifeResult};

/// Ten frames at 60 FPS.
pub const DEFAULT_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CadenceConfig {
    /// Time between generations while autoplay is on.
    pub interval: Duration,
    pub autoplay: bool,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            autoplay: false,
        }
    }
}

impl CadenceConfig {
    /// Parses seconds per generation. Blank input keeps the default.
    pub fn from_seconds(text: &str) -> LifeResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }
        let seconds: f64 = text
            .parse()
            .map_err(|_| LifeError::InvalidInterval(text.to_string()))?;
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(LifeError::InvalidInterval(text.to_string()));
        }
        let interval = Duration::try_from_secs_f64(seconds)
            .map_err(|_| LifeError::InvalidInterval(text.to_string()))?;
        Ok(Self {
            interval,
            ..Self::default()
        })
    }
}

/// Decides when the shell should advance the board. Owns no board state.
#[derive(Clone, Debug)]
pub struct Cadence {
    config: CadenceConfig,
    accumulated: Duration,
    pending: bool,
}

impl Cadence {
    pub fn new(config: CadenceConfig) -> Self {
        Self {
            config,
            accumulated: Duration::ZERO,
            pending: false,
        }
    }

    pub fn autoplay(&self) -> bool {
        self.config.autoplay
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.config.autoplay = !self.config.autoplay;
        self.config.autoplay
    }

    /// The next `tick` will report a step even when paused.
    pub fn request_step(&mut self) {
        self.pending = true;
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.pending = false;
    }

    /// Feeds elapsed wall time; true means "step once now". Never more than one step per call.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.config.autoplay {
            self.accumulated = self.accumulated.saturating_add(elapsed);
        }
        if self.pending || self.accumulated >= self.config.interval {
            self.reset();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn paused_never_steps_on_its_own() {
        let mut cadence = Cadence::new(CadenceConfig::default());
        for _ in 0..1000 {
            assert!(!cadence.tick(FRAME));
        }
    }

    #[test]
    fn autoplay_steps_once_per_interval() {
        let mut cadence = Cadence::new(CadenceConfig {
            interval: Duration::from_millis(100),
            autoplay: true,
        });
        let steps = (0..60).filter(|_| cadence.tick(Duration::from_millis(10))).count();
        assert_eq!(steps, 6);
    }

    #[test]
    fn long_frame_yields_single_step() {
        let mut cadence = Cadence::new(CadenceConfig {
            interval: Duration::from_millis(100),
            autoplay: true,
        });
        assert!(cadence.tick(Duration::from_secs(5)));
        assert!(!cadence.tick(Duration::ZERO));
    }

    #[test]
    fn requested_step_fires_once_while_paused() {
        let mut cadence = Cadence::new(CadenceConfig::default());
        cadence.request_step();
        assert!(cadence.tick(Duration::ZERO));
        assert!(!cadence.tick(FRAME));
    }

    #[test]
    fn reset_drops_progress_and_requests() {
        let mut cadence = Cadence::new(CadenceConfig {
            interval: Duration::from_millis(100),
            autoplay: true,
        });
        assert!(!cadence.tick(Duration::from_millis(90)));
        cadence.request_step();
        cadence.reset();
        assert!(!cadence.tick(Duration::from_millis(90)));
        assert!(cadence.tick(Duration::from_millis(10)));
    }

    #[test]
    fn toggle_autoplay_flips() {
        let mut cadence = Cadence::new(CadenceConfig::default());
        assert!(cadence.toggle_autoplay());
        assert!(cadence.autoplay());
        assert!(!cadence.toggle_autoplay());
    }

    #[test]
    fn parses_intervals() {
        assert_eq!(CadenceConfig::from_seconds("").unwrap(), CadenceConfig::default());
        assert_eq!(
            CadenceConfig::from_seconds(" 0.5\n").unwrap().interval,
            Duration::from_millis(500)
        );
        for bad in ["0", "-1", "abc", "inf", "NaN"] {
            assert!(matches!(
                CadenceConfig::from_seconds(bad),
                Err(LifeError::InvalidInterval(_))
            ));
        }
    }
}
