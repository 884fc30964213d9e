use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared limiter covering every call to the public endpoints. The public
/// geocoder's fair-use policy caps clients at one request per second.
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl Limiter {
    pub fn new() -> Self {
        let quota = Quota::per_second(NonZeroU32::new(1).unwrap());
        Self { inner: Arc::new(RateLimiter::direct(quota)) }
    }

    /// Blocks until the next outbound request is allowed.
    pub fn wait(&self) {
        while self.inner.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }
    }
}

impl Default for Limiter {
    fn default() -> Self {
        Self::new()
    }
}
