use std::thread;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive range of whole seconds to wait, picked uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayRange {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl DelayRange {
    pub const fn new(min_secs: u64, max_secs: u64) -> Self {
        Self { min_secs, max_secs }
    }

    pub fn contains(&self, delay: Duration) -> bool {
        let (lo, hi) = self.bounds();
        delay >= Duration::from_secs(lo) && delay <= Duration::from_secs(hi)
    }

    pub fn pick(&self) -> Duration {
        let (lo, hi) = self.bounds();
        Duration::from_secs(rand::thread_rng().gen_range(lo..=hi))
    }

    fn bounds(&self) -> (u64, u64) {
        if self.min_secs <= self.max_secs {
            (self.min_secs, self.max_secs)
        } else {
            (self.max_secs, self.min_secs)
        }
    }
}

pub trait Sleep {
    fn sleep(&self, delay: Duration);
}

impl<T: Sleep + ?Sized> Sleep for &T {
    fn sleep(&self, delay: Duration) {
        (**self).sleep(delay)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&self, delay: Duration) {
        thread::sleep(delay)
    }
}
