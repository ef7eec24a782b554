use std::time::Duration;
use tokio::time::sleep;

/// Enforces a fixed pause between consecutive requests to the same service
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    /// The first request goes out immediately, later ones wait for the delay
    pub async fn wait(&mut self) {
        if self.should_wait() {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0 && !self.delay.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Instant;

    #[tokio::test]
    async fn test_only_later_requests_wait() {
        let mut limiter = RateLimiter::new(30);

        let start = Instant::now();
        limiter.wait().await;
        let first = start.elapsed();
        limiter.wait().await;
        let second = start.elapsed() - first;

        assert!(first < Duration::from_millis(30));
        assert!(second >= Duration::from_millis(30));
    }
}
