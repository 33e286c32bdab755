//! Hardware transports.
//!
//! The sampler consumes hardware through two traits. [`Transport`] is the
//! analog-only capability that every board has: one analog channel, a
//! microsecond clock and a blocking sleep. [`DigitalTransport`] adds an I2S
//! port and is only available with the `i2s` feature, so which capability a
//! sampler has is chosen at build time through its type parameter.
//!
//! Two adapters are provided:
//!
//! - [`HalTransport`] (feature `hal`) builds a [`Transport`] from an
//!   [`AnalogRead`] channel, a [`MicrosClock`] and any
//!   [`embedded_hal::delay::DelayNs`] implementation.
//! - [`WithI2s`] (feature `i2s`) pairs any [`Transport`] with an
//!   [`I2sPort`] to give a [`DigitalTransport`].

use core::fmt::Debug;

#[cfg(feature = "hal")]
use embedded_hal::delay::DelayNs;

#[cfg(feature = "i2s")]
use crate::config::I2sConfig;

/// Analog capture capability.
pub trait Transport {
    /// Error reported by the hardware.
    type Error: Debug;

    /// Configure `pin` as the analog input channel.
    fn setup_analog(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Read one raw sample from the configured analog channel.
    fn read_raw_analog(&mut self) -> Result<i32, Self::Error>;

    /// Free-running microsecond counter. Wraps at `u32::MAX`.
    fn now_micros(&mut self) -> u32;

    /// Block for `us` microseconds.
    fn sleep_micros(&mut self, us: u32);
}

/// I2S capture and playback capability, on top of [`Transport`].
#[cfg(feature = "i2s")]
pub trait DigitalTransport: Transport {
    /// Start the I2S receiver.
    fn setup_digital_input(&mut self, config: &I2sConfig) -> Result<(), Self::Error>;

    /// Start the I2S transmitter.
    fn setup_digital_output(&mut self, config: &I2sConfig) -> Result<(), Self::Error>;

    /// Read one stereo frame `(left, right)`, blocking until it arrives.
    fn digital_read_frame(&mut self) -> Result<(i32, i32), Self::Error>;

    /// Queue one 16-bit word for transmission, blocking while the queue is full.
    fn digital_write_sample(&mut self, sample: u16) -> Result<(), Self::Error>;

    /// Block until every queued word has been transmitted.
    fn digital_flush(&mut self) -> Result<(), Self::Error>;
}

/// One-shot analog-to-digital conversion.
pub trait AnalogRead {
    type Error: Debug;

    /// Select the input pin. The default accepts any pin.
    fn configure(&mut self, pin: u8) -> Result<(), Self::Error> {
        let _ = pin;
        Ok(())
    }

    /// Convert once and return the raw code.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Free-running microsecond timer, e.g. the RP2040 `TIMERAWL` register.
pub trait MicrosClock {
    fn now_micros(&self) -> u32;
}

/// [`Transport`] assembled from an ADC channel, a timer and an
/// `embedded-hal` delay provider.
///
/// # Example
///
/// ```ignore
/// let transport = HalTransport::new(adc_channel, timer, delay);
/// let audio = AudioSampler::builder(transport).analog_pin(26)?.build();
/// ```
#[cfg(feature = "hal")]
pub struct HalTransport<A, C, D> {
    adc: A,
    clock: C,
    delay: D,
}

#[cfg(feature = "hal")]
impl<A, C, D> HalTransport<A, C, D>
where
    A: AnalogRead,
    C: MicrosClock,
    D: DelayNs,
{
    pub fn new(adc: A, clock: C, delay: D) -> Self {
        Self { adc, clock, delay }
    }

    /// Give back the parts.
    pub fn release(self) -> (A, C, D) {
        (self.adc, self.clock, self.delay)
    }
}

#[cfg(feature = "hal")]
impl<A, C, D> Transport for HalTransport<A, C, D>
where
    A: AnalogRead,
    C: MicrosClock,
    D: DelayNs,
{
    type Error = A::Error;

    fn setup_analog(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.adc.configure(pin)
    }

    fn read_raw_analog(&mut self) -> Result<i32, Self::Error> {
        self.adc.read().map(i32::from)
    }

    fn now_micros(&mut self) -> u32 {
        self.clock.now_micros()
    }

    fn sleep_micros(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

/// Blocking I2S peripheral, one direction or both.
#[cfg(feature = "i2s")]
pub trait I2sPort {
    type Error: Debug;

    fn begin_input(&mut self, config: &I2sConfig) -> Result<(), Self::Error>;

    fn begin_output(&mut self, config: &I2sConfig) -> Result<(), Self::Error>;

    /// Blocking read of one `(left, right)` frame.
    fn read_frame(&mut self) -> Result<(i32, i32), Self::Error>;

    /// Blocking write of one word.
    fn write(&mut self, sample: u16) -> Result<(), Self::Error>;

    /// Drain the transmit FIFO.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Error from a [`WithI2s`] transport.
#[cfg(feature = "i2s")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError<A, B> {
    Analog(A),
    I2s(B),
}

/// A [`Transport`] extended with an [`I2sPort`].
#[cfg(feature = "i2s")]
pub struct WithI2s<T, P> {
    base: T,
    port: P,
}

#[cfg(feature = "i2s")]
impl<T: Transport, P: I2sPort> WithI2s<T, P> {
    pub fn new(base: T, port: P) -> Self {
        Self { base, port }
    }

    pub fn release(self) -> (T, P) {
        (self.base, self.port)
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(feature = "i2s")]
impl<T: Transport, P: I2sPort> Transport for WithI2s<T, P> {
    type Error = PortError<T::Error, P::Error>;

    fn setup_analog(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.base.setup_analog(pin).map_err(PortError::Analog)
    }

    fn read_raw_analog(&mut self) -> Result<i32, Self::Error> {
        self.base.read_raw_analog().map_err(PortError::Analog)
    }

    fn now_micros(&mut self) -> u32 {
        self.base.now_micros()
    }

    fn sleep_micros(&mut self, us: u32) {
        self.base.sleep_micros(us)
    }
}

#[cfg(feature = "i2s")]
impl<T: Transport, P: I2sPort> DigitalTransport for WithI2s<T, P> {
    fn setup_digital_input(&mut self, config: &I2sConfig) -> Result<(), Self::Error> {
        self.port.begin_input(config).map_err(PortError::I2s)
    }

    fn setup_digital_output(&mut self, config: &I2sConfig) -> Result<(), Self::Error> {
        self.port.begin_output(config).map_err(PortError::I2s)
    }

    fn digital_read_frame(&mut self) -> Result<(i32, i32), Self::Error> {
        self.port.read_frame().map_err(PortError::I2s)
    }

    fn digital_write_sample(&mut self, sample: u16) -> Result<(), Self::Error> {
        self.port.write(sample).map_err(PortError::I2s)
    }

    fn digital_flush(&mut self) -> Result<(), Self::Error> {
        self.port.flush().map_err(PortError::I2s)
    }
}

#[cfg(all(test, feature = "hal"))]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct AdcError;

    struct MockAdc {
        pin: Option<u8>,
        next: u16,
    }

    impl AnalogRead for MockAdc {
        type Error = AdcError;

        fn configure(&mut self, pin: u8) -> Result<(), Self::Error> {
            if pin < 26 {
                return Err(AdcError);
            }
            self.pin = Some(pin);
            Ok(())
        }

        fn read(&mut self) -> Result<u16, Self::Error> {
            self.next += 1;
            Ok(self.next)
        }
    }

    struct MockClock {
        now: Cell<u32>,
    }

    impl MicrosClock for MockClock {
        fn now_micros(&self) -> u32 {
            let t = self.now.get();
            self.now.set(t + 5);
            t
        }
    }

    /// Records the total delay requested, in nanoseconds.
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn transport() -> HalTransport<MockAdc, MockClock, MockDelay> {
        HalTransport::new(
            MockAdc { pin: None, next: 1000 },
            MockClock { now: Cell::new(0) },
            MockDelay { total_ns: 0 },
        )
    }

    #[test]
    fn setup_forwards_to_adc() {
        let mut t = transport();
        assert_eq!(t.setup_analog(3), Err(AdcError));
        assert_eq!(t.setup_analog(26), Ok(()));
        let (adc, _, _) = t.release();
        assert_eq!(adc.pin, Some(26));
    }

    #[test]
    fn read_widens_raw_code() {
        let mut t = transport();
        assert_eq!(t.read_raw_analog(), Ok(1001));
        assert_eq!(t.read_raw_analog(), Ok(1002));
    }

    #[test]
    fn clock_and_sleep() {
        let mut t = transport();
        assert_eq!(t.now_micros(), 0);
        assert_eq!(t.now_micros(), 5);
        t.sleep_micros(125);
        let (_, _, delay) = t.release();
        assert_eq!(delay.total_ns, 125_000);
    }
}
