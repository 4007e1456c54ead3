//! Blocking delay abstraction

/// Blocking, non-cancellable delay
///
/// Gait phases are separated by calls to this trait. The call must not
/// return before the requested time has elapsed.
pub trait Delay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
