use std::time::Duration;

/// Automatic descent pacing.
///
/// The delay between two automatic soft drops starts at `max_delay` and
/// shrinks by `decrease` for every cleared row, never going below
/// `min_delay`. If `min_delay` exceeds `max_delay`, `min_delay` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gravity {
    max_delay: Duration,
    min_delay: Duration,
    decrease: Duration,
}

impl Gravity {
    pub(crate) fn from_millis(max_delay: u64, min_delay: u64, decrease: u64) -> Self {
        Self {
            max_delay: Duration::from_millis(max_delay),
            min_delay: Duration::from_millis(min_delay),
            decrease: Duration::from_millis(decrease),
        }
    }

    pub(crate) fn delay(&self, score: usize) -> Duration {
        let steps = u32::try_from(score).unwrap_or(u32::MAX);
        self.max_delay
            .saturating_sub(self.decrease.saturating_mul(steps))
            .max(self.min_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Gravity {
        Gravity::from_millis(1000, 75, 25)
    }

    #[test]
    fn test_delay_shrinks_with_score() {
        let gravity = classic();
        assert_eq!(gravity.delay(0), Duration::from_millis(1000));
        assert_eq!(gravity.delay(1), Duration::from_millis(975));
        assert_eq!(gravity.delay(10), Duration::from_millis(750));
        assert_eq!(gravity.delay(37), Duration::from_millis(75));
    }

    #[test]
    fn test_delay_never_below_minimum() {
        let gravity = classic();
        for score in [38, 40, 1000, usize::MAX] {
            assert_eq!(gravity.delay(score), Duration::from_millis(75));
        }
    }

    #[test]
    fn test_minimum_wins_over_maximum() {
        let gravity = Gravity::from_millis(50, 100, 25);
        assert_eq!(gravity.delay(0), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_decrease_is_constant() {
        let gravity = Gravity::from_millis(500, 75, 0);
        assert_eq!(gravity.delay(0), gravity.delay(1_000_000));
    }
}
