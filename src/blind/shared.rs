//! Thread-safe blind handle (std only).
//!
//! Every session mutation happens under one mutex, so inbound target requests
//! and the background poller never interleave.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::units::{Instant, Percent};
use crate::motion::{Clock, MotionState};

use super::driver::BlindController;
use super::relay::Actuator;
use super::report::Reporter;

/// Cloneable handle to a controller shared between threads.
pub struct SharedBlind<A, C, R = ()>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    inner: Arc<Mutex<BlindController<A, C, R>>>,
}

impl<A, C, R> Clone for SharedBlind<A, C, R>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, C, R> SharedBlind<A, C, R>
where
    A: Actuator,
    C: Clock,
    R: Reporter,
{
    /// Wrap a controller.
    pub fn new(controller: BlindController<A, C, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Estimated position.
    pub fn current_position(&self) -> Percent {
        self.lock().current_position()
    }

    /// Believed direction of travel.
    pub fn motion_state(&self) -> MotionState {
        self.lock().motion_state()
    }

    /// Last commanded target.
    pub fn target_position(&self) -> Percent {
        self.lock().target_position()
    }

    /// Command a new target position.
    pub fn set_target_position(&self, position: Percent) {
        self.lock().set_target_position(position);
    }

    /// Stop at the current estimated position.
    pub fn stop(&self) {
        self.lock().stop();
    }

    /// Process everything due up to now.
    pub fn poll(&self) {
        self.lock().poll();
    }

    /// When `poll` next has work to do, if ever.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock().next_deadline()
    }

    /// Run a closure with exclusive access to the controller.
    pub fn with<T>(&self, f: impl FnOnce(&mut BlindController<A, C, R>) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, BlindController<A, C, R>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A, C, R> SharedBlind<A, C, R>
where
    A: Actuator + Send + 'static,
    C: Clock + Send + 'static,
    R: Reporter + Send + 'static,
{
    /// Poll the controller every `interval` on a background thread.
    ///
    /// The thread runs until the returned handle is stopped or dropped.
    pub fn spawn_poller(&self, interval: Duration) -> PollerHandle {
        let blind = self.clone();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let thread = thread::spawn(move || {
            while flag.load(Ordering::Acquire) {
                blind.poll();
                thread::sleep(interval);
            }
        });

        PollerHandle {
            running,
            thread: Some(thread),
        }
    }
}

/// Stops the background poller when stopped or dropped.
#[derive(Debug)]
pub struct PollerHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Stop polling and wait for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("blind poller thread panicked");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
