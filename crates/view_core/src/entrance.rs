//! Staggered entrance timing for lists revealed by a visibility flip.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceSchedule {
    pub base_delay_ms: u64,
    pub step_ms: u64,
    pub duration_ms: u64,
}

impl EntranceSchedule {
    pub const HERO: EntranceSchedule = EntranceSchedule {
        base_delay_ms: 300,
        step_ms: 0,
        duration_ms: 1000,
    };
    pub const SKILL_BARS: EntranceSchedule = EntranceSchedule {
        base_delay_ms: 900,
        step_ms: 200,
        duration_ms: 1000,
    };
    pub const PROJECT_CARDS: EntranceSchedule = EntranceSchedule {
        base_delay_ms: 1100,
        step_ms: 200,
        duration_ms: 500,
    };

    pub fn delay_for(&self, index: usize) -> Duration {
        let step = self.step_ms.saturating_mul(index as u64);
        Duration::from_millis(self.base_delay_ms.saturating_add(step))
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Eased progress in `[0, 1]` for element `index`, `elapsed` after the flip.
    pub fn progress(&self, elapsed: Duration, index: usize) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay_for(index)) else {
            return 0.0;
        };
        if self.duration_ms == 0 {
            return 1.0;
        }
        let linear = (running.as_secs_f32() / self.duration().as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(linear)
    }

    /// Time after the flip at which the last of `count` elements settles.
    pub fn settled_after(&self, count: usize) -> Duration {
        self.delay_for(count.saturating_sub(1)) + self.duration()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Width fraction of a skill bar. Zero until the owning section is visible.
pub fn skill_fill_fraction(level: u8, is_visible: bool, progress: f32) -> f32 {
    if !is_visible {
        return 0.0;
    }
    let target = f32::from(level.min(100)) / 100.0;
    target * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_by_step_per_index() {
        let schedule = EntranceSchedule::PROJECT_CARDS;
        assert_eq!(schedule.delay_for(0), Duration::from_millis(1100));
        assert_eq!(schedule.delay_for(1), Duration::from_millis(1300));
        assert_eq!(schedule.delay_for(2), Duration::from_millis(1500));
    }

    #[test]
    fn progress_waits_for_delay_then_settles_at_one() {
        let schedule = EntranceSchedule::SKILL_BARS;
        assert_eq!(schedule.progress(Duration::from_millis(500), 0), 0.0);
        let halfway = schedule.progress(Duration::from_millis(1400), 0);
        assert!(halfway > 0.5 && halfway < 1.0, "ease-out is ahead of linear");
        assert_eq!(schedule.progress(Duration::from_millis(1900), 0), 1.0);
        let second = schedule.progress(Duration::from_millis(1900), 1);
        assert!((second - 0.992).abs() < 1e-4);
        assert_eq!(schedule.progress(Duration::from_secs(60), 4), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_done_after_delay() {
        let schedule = EntranceSchedule {
            base_delay_ms: 100,
            step_ms: 0,
            duration_ms: 0,
        };
        assert_eq!(schedule.progress(Duration::from_millis(99), 0), 0.0);
        assert_eq!(schedule.progress(Duration::from_millis(100), 0), 1.0);
    }

    #[test]
    fn settles_after_last_element_finishes() {
        let schedule = EntranceSchedule::SKILL_BARS;
        assert_eq!(schedule.settled_after(5), Duration::from_millis(2700));
        assert_eq!(schedule.settled_after(0), Duration::from_millis(1900));
    }

    #[test]
    fn skill_bar_is_empty_until_visible() {
        assert_eq!(skill_fill_fraction(90, false, 1.0), 0.0);
        assert_eq!(skill_fill_fraction(90, true, 1.0), 0.9);
        assert_eq!(skill_fill_fraction(80, true, 0.5), 0.4);
        assert_eq!(skill_fill_fraction(250, true, 1.0), 1.0);
    }
}
