use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use rand::Rng;

use crate::configuration::ThrottleSettings;

/// Paces calls to the model endpoint. Shared by every batch in the process.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn wait(&self);
}

/// Sleeps a uniformly random interval in `[min, max]` before each call.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        match min <= max {
            true => RandomDelay { min, max },
            false => RandomDelay { min: max, max: min },
        }
    }

    pub fn next_delay(&self) -> Duration {
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

#[async_trait]
impl Throttle for RandomDelay {
    async fn wait(&self) {
        let delay = self.next_delay();
        log::debug!("Throttling model call for {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}

pub struct NoThrottle;

#[async_trait]
impl Throttle for NoThrottle {
    async fn wait(&self) {}
}

pub fn throttle_from_settings(settings: &ThrottleSettings) -> Arc<dyn Throttle> {
    match settings.max_delay_ms {
        0 => Arc::new(NoThrottle),
        _ => Arc::new(RandomDelay::new(
            Duration::from_millis(settings.min_delay_ms),
            Duration::from_millis(settings.max_delay_ms),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::RandomDelay;

    #[test]
    fn delays_stay_in_range() {
        let throttle = RandomDelay::new(Duration::from_secs(1), Duration::from_secs(3));
        for _ in 0..200 {
            let delay = throttle.next_delay();
            assert!(delay >= Duration::from_secs(1) && delay <= Duration::from_secs(3));
        }
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let throttle = RandomDelay::new(Duration::from_millis(30), Duration::from_millis(10));
        let delay = throttle.next_delay();
        assert!(delay >= Duration::from_millis(10) && delay <= Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_the_drawn_delay() {
        use super::Throttle;

        let throttle = RandomDelay::new(Duration::from_secs(2), Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        throttle.wait().await;
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
