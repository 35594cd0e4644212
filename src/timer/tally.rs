//! Bonus tally arithmetic: points -> frames -> wall-clock duration

use std::time::Duration;

use crate::config::Settings;

/// Frames a score tally runs to count `points` down at `points_per_frame`.
///
/// A partial last frame still costs a whole frame. Zero or negative inputs
/// take no time.
#[inline]
pub fn tally_frames(points: i32, points_per_frame: i32) -> i64 {
    if points <= 0 || points_per_frame <= 0 {
        return 0;
    }
    (points as u64).div_ceil(points_per_frame as u64) as i64
}

/// Wall-clock length of `frames` at `fps`
#[inline]
pub fn frames_to_duration(frames: i64, fps: f64) -> Duration {
    if frames <= 0 || !fps.is_finite() || fps <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(frames as f64 / fps)
}

impl Settings {
    /// Time the game spends counting down `points` of bonus
    pub fn tally_duration(&self, points: i32) -> Duration {
        frames_to_duration(
            tally_frames(points, self.points_per_frame()),
            self.frames_per_second(),
        )
    }

    /// Tally time for the time bonus a level finished at `level_time_ms` earns
    pub fn bonus_tally(&self, level_time_ms: i32) -> Duration {
        self.tally_duration(self.lookup().bonus_for(level_time_ms))
    }

    /// Time consumed by `continues` continue screens
    pub fn continue_duration(&self, continues: u32) -> Duration {
        frames_to_duration(
            continues as i64 * self.continue_frames() as i64,
            self.frames_per_second(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_frames_rounds_up() {
        assert_eq!(tally_frames(62000, 100), 620);
        assert_eq!(tally_frames(150, 100), 2);
        assert_eq!(tally_frames(0, 100), 0);
        assert_eq!(tally_frames(500, 0), 0);
    }

    #[test]
    fn test_frames_to_duration() {
        assert_eq!(frames_to_duration(120, 60.0), Duration::from_secs(2));
        assert_eq!(frames_to_duration(10, 0.0), Duration::ZERO);
        assert_eq!(frames_to_duration(-1, 60.0), Duration::ZERO);
    }

    #[test]
    fn test_bonus_tally_uses_lookup() {
        let mut settings = Settings::new();
        settings.set_frames_per_second(60.0).unwrap();
        // 0:29 earns 62000 -> 620 frames
        let expected = frames_to_duration(620, 60.0);
        assert_eq!(settings.bonus_tally(29_000), expected);
        // past 5:00 nothing to count
        assert_eq!(settings.bonus_tally(400_000), Duration::ZERO);
    }

    #[test]
    fn test_continue_duration() {
        let mut settings = Settings::new();
        settings.set_frames_per_second(60.0).unwrap();
        assert_eq!(settings.continue_duration(3), Duration::from_secs(6));
        assert_eq!(settings.continue_duration(0), Duration::ZERO);
    }
}
