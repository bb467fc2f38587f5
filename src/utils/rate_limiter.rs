use std::sync::Arc;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::{sleep, Duration, Instant};

/// Paces calls against the upstream API: caps in-flight requests and keeps
/// a minimum gap between consecutive request starts.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, min_delay: Duration) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            min_delay,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits for a slot. The slot is released when the guard drops.
    pub async fn acquire(&self) -> RateLimitGuard {
        // The semaphore is owned here and never closed.
        let permit = self.semaphore.clone().acquire_owned().await.ok();

        let mut last_request = self.last_request.lock().await;
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                let wait_time = self.min_delay - elapsed;
                tracing::trace!("pacing upstream request by {:?}", wait_time);
                sleep(wait_time).await;
            }
        }
        *last_request = Some(Instant::now());

        RateLimitGuard { _permit: permit }
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

pub struct RateLimitGuard {
    _permit: Option<OwnedSemaphorePermit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn guard_holds_a_slot_until_dropped() {
        let limiter = RateLimiter::new(2, Duration::ZERO);
        assert_eq!(limiter.available_permits(), 2);

        let first = limiter.acquire().await;
        let second = limiter.acquire().await;
        assert_eq!(limiter.available_permits(), 0);

        drop(first);
        assert_eq!(limiter.available_permits(), 1);
        drop(second);
        assert_eq!(limiter.available_permits(), 2);
    }

    #[tokio::test]
    async fn consecutive_requests_are_spaced() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));
        let start = Instant::now();
        drop(limiter.acquire().await);
        drop(limiter.acquire().await);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let limiter = RateLimiter::new(0, Duration::ZERO);
        assert_eq!(limiter.available_permits(), 1);
    }
}
