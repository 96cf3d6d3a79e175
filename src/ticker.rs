use std::time::Duration;

/// Fires at most once per `period`, driven by the frame clock (seconds).
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    last_fired_at: f64,
}

impl Ticker {
    pub fn new(period: Duration, now: f64) -> Self {
        Self {
            period,
            last_fired_at: now,
        }
    }

    /// Re-arms the timer when the period changes. Same period is a no-op.
    pub fn set_period(&mut self, period: Duration, now: f64) {
        if period != self.period {
            *self = Self::new(period, now);
        }
    }

    /// Returns true when a tick is due and starts the next period.
    ///
    /// Periods are laid end to end so frame jitter does not slow the
    /// cadence. After a stall longer than two periods the schedule
    /// restarts from `now` and only one tick is reported.
    pub fn poll(&mut self, now: f64) -> bool {
        let period = self.period.as_secs_f64();
        let elapsed = now - self.last_fired_at;
        if elapsed < period {
            return false;
        }
        if elapsed < 2.0 * period {
            self.last_fired_at += period;
        } else {
            self.last_fired_at = now;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_per_period() {
        let mut ticker = Ticker::new(PERIOD, 0.0);
        assert!(!ticker.poll(0.1));
        assert!(!ticker.poll(0.29));
        assert!(ticker.poll(0.301));
        assert!(!ticker.poll(0.35));
        assert!(ticker.poll(0.65));
    }

    #[test]
    fn late_frames_do_not_push_back_the_schedule() {
        let mut ticker = Ticker::new(PERIOD, 0.0);
        assert!(ticker.poll(0.35));
        assert!(ticker.poll(0.62));
        // Next tick is due at 0.9, not 0.92.
        assert!(!ticker.poll(0.89));
        assert!(ticker.poll(0.91));
    }

    #[test]
    fn long_stall_yields_a_single_tick() {
        let mut ticker = Ticker::new(PERIOD, 0.0);
        assert!(ticker.poll(5.0));
        assert!(!ticker.poll(5.0));
    }

    #[test]
    fn changing_period_rearms_from_now() {
        let mut ticker = Ticker::new(PERIOD, 0.0);
        ticker.set_period(Duration::from_millis(100), 0.25);
        assert!(!ticker.poll(0.3));
        assert!(ticker.poll(0.36));

        ticker.set_period(Duration::from_millis(100), 0.4);
        assert!(ticker.poll(0.47));
    }
}
