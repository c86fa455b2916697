//! Score and session clock
//!
//! The score rewards both size and survival time. Time enters through the
//! clock-face minute and second fields, so it cycles every hour.

use serde::{Deserialize, Serialize};

/// Elapsed session time split into clock-face fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    /// 0-59
    pub minutes: u32,
    /// 0-59
    pub seconds: u32,
}

impl ClockTime {
    pub fn from_elapsed_ms(elapsed_ms: f64) -> Self {
        let total_secs = (elapsed_ms.max(0.0) / 1000.0).floor() as u64;
        Self {
            minutes: ((total_secs / 60) % 60) as u32,
            seconds: (total_secs % 60) as u32,
        }
    }

    /// Survival bonus: (minutes + 1) * (seconds + 1) * 10
    pub fn time_score(&self) -> u64 {
        (self.minutes as u64 + 1) * (self.seconds as u64 + 1) * 10
    }
}

/// floor((size - min_size) * 10 + time_score)
pub fn compute_score(player_size: f32, player_min_size: f32, clock: ClockTime) -> u64 {
    let size_score = (player_size - player_min_size).max(0.0) as f64 * 10.0;
    (size_score + clock.time_score() as f64).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_fields() {
        assert_eq!(ClockTime::from_elapsed_ms(0.0), ClockTime::default());
        assert_eq!(
            ClockTime::from_elapsed_ms(61_999.0),
            ClockTime {
                minutes: 1,
                seconds: 1
            }
        );
        // Minutes wrap on the hour like a clock face
        assert_eq!(
            ClockTime::from_elapsed_ms(3_600_000.0 + 5_000.0),
            ClockTime {
                minutes: 0,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_score_at_start() {
        // Fresh player: (20 - 5) * 10 + 1 * 1 * 10
        assert_eq!(compute_score(20.0, 5.0, ClockTime::default()), 160);
    }

    #[test]
    fn test_score_floors_fractional_size() {
        let clock = ClockTime {
            minutes: 2,
            seconds: 9,
        };
        // (7.37 - 5) * 10 = 23.7 -> floor with 3 * 10 * 10 = 300
        assert_eq!(compute_score(7.37, 5.0, clock), 323);
    }
}
