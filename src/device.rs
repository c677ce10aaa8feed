//! Execution device hooks used around the numeric core: timing and fail-fast status checks.
//!
//! The numeric primitives never call into this module. It exists for callers that drive
//! external work (for example on an accelerator) and need to measure it or abort on failure.

use std::fmt::Display;
use std::panic::Location;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Device errors
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("synchronization with {device} failed: {reason}")]
    Synchronize { device: &'static str, reason: String },

    #[error("launch on {device} failed: {reason}")]
    Launch { device: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, DeviceError>;

/// An execution context whose queued work can be waited for.
pub trait Device {
    fn name(&self) -> &'static str;

    /// Blocks until all work previously submitted to the device has completed.
    fn synchronize(&self) -> Result<()>;
}

/// The calling thread. Work runs synchronously, so there is nothing to wait for.
#[derive(Debug, Default, Clone, Copy)]
pub struct Host;

impl Device for Host {
    fn name(&self) -> &'static str {
        "host"
    }

    fn synchronize(&self) -> Result<()> {
        Ok(())
    }
}

/// Returns the value of a successful `result`, or logs the error with the caller location and
/// aborts the process.
#[track_caller]
pub fn check<T, E: Display>(result: std::result::Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fail_fast(Location::caller(), &err),
    }
}

#[cold]
#[inline(never)]
fn fail_fast(location: &Location<'_>, err: &dyn Display) -> ! {
    log::error!("{}({}): {}", location.file(), location.line(), err);
    eprintln!("{}({}): {}", location.file(), location.line(), err);
    std::process::abort()
}

/// Waits for the device in debug builds, aborting on failure. Does nothing in release builds.
#[track_caller]
#[inline]
pub fn debug_sync<D: Device + ?Sized>(device: &D) {
    if cfg!(debug_assertions) {
        check(device.synchronize());
    }
}

/// Runs `f` on the host and returns the elapsed wall clock time.
pub fn profile<F: FnOnce()>(f: F) -> Duration {
    profile_on(&Host, f)
}

/// Runs `f`, which may submit work to `device`, and returns the time until that work completed.
#[track_caller]
pub fn profile_on<D: Device + ?Sized, F: FnOnce()>(device: &D, f: F) -> Duration {
    let start = Instant::now();
    f();
    check(device.synchronize());
    let elapsed = start.elapsed();
    log::trace!("{} profile: {:.3} ms", device.name(), elapsed.as_secs_f64() * 1e3);
    elapsed
}
