use std::sync::Mutex;

use crate::ports::Throttle;

/// Zero-delay throttle that counts how often it was asked to pause.
#[derive(Default)]
pub struct CountingThrottle {
    pub pauses: Mutex<usize>,
}

impl CountingThrottle {
    pub fn count(&self) -> usize {
        *self.pauses.lock().unwrap()
    }
}

impl Throttle for CountingThrottle {
    fn pause(&self) {
        *self.pauses.lock().unwrap() += 1;
    }
}
