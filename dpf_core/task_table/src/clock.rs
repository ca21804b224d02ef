use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Next-run time as shown to the viewer: a time already in the past is
/// shown as `now`.
pub fn displayed_next_run(next_run: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if next_run < now {
        now
    } else {
        next_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn past_times_clamp_to_now() {
        let now = FixedClock(test_utils::fixed_now()).now();

        assert_eq!(displayed_next_run(now - Duration::hours(3), now), now);
        assert_eq!(
            displayed_next_run(now + Duration::minutes(1), now),
            now + Duration::minutes(1)
        );
        assert_eq!(displayed_next_run(now, now), now);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
