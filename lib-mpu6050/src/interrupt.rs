use core::fmt::Debug;
use core::sync::atomic::{AtomicBool, Ordering};

/// Does the MPU6050 have new DMP data ready for us? This flag is set from the interrupt handler
/// of the sensor's INT pin and cleared by the main loop when it drains the FIFO.
///
/// Several interrupts before the main loop gets around to it collapse into a single pending
/// signal, the FIFO count decides how much data is actually read. Only `load` and `store` are
/// used so this also works on targets without compare-and-swap atomics (e.g. the ESP32-C3).
///
pub struct DataReady(AtomicBool);

impl DataReady {
    pub const fn new() -> Self {
        DataReady(AtomicBool::new(false))
    }

    /// Raise the flag, this is the only thing the interrupt handler should do.
    ///
    #[inline]
    pub fn signal(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for DataReady {
    fn default() -> Self {
        Self::new()
    }
}

/// Process wide flag used by trackers constructed with `OrientationTracker::new`.
///
pub static MPU_INTERRUPT: DataReady = DataReady::new();

/// A GPIO line wired to the MPU6050's INT pin.
///
/// Implementations arm the pin for falling edges and make their interrupt handler call
/// `flag.signal()`, nothing else. On an ESP32 this usually means stashing the `Input` pin in a
/// `critical_section::Mutex` and checking/clearing `is_interrupt_set()` from a `#[handler]`.
///
pub trait InterruptPin {
    type Error: Debug;

    fn on_falling_edge(&mut self, flag: &'static DataReady) -> Result<(), Self::Error>;
}
