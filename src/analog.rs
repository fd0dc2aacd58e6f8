/// Platform analog-input subsystem used by `crate::Sht4xAnalog` to configure pins and take raw
/// samples. Sampling is treated as infallible and instantaneous. Can be replaced with
/// `MockAnalog` for testing.
pub trait AnalogInput {
    /// Logical pin or channel identifier understood by the platform.
    type Pin: Copy;

    /// Prepares `pin` for analog sampling. May be called more than once for the same pin.
    fn configure_input(&mut self, pin: Self::Pin);

    /// Returns the instantaneous raw ADC count on `pin`.
    fn sample(&mut self, pin: Self::Pin) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Pin = T::Pin;

    #[inline]
    fn configure_input(&mut self, pin: Self::Pin) {
        (**self).configure_input(pin)
    }

    #[inline]
    fn sample(&mut self, pin: Self::Pin) -> u16 {
        (**self).sample(pin)
    }
}
