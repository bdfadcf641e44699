//! Monotonic time source abstraction

/// Monotonic millisecond clock.
///
/// Readings must be non-decreasing. All elapsed-time comparisons in the
/// countdown core are made against values returned from here.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch (usually boot).
    fn now_ms(&self) -> u64;
}

/// [`Clock`] backed by the Embassy time driver.
///
/// On hardware the driver is TIM2 at 32.768 kHz; on the desktop it is the
/// embassy-time `std` driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Create a clock handle. The driver itself is a process-wide singleton.
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
