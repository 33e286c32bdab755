//! Scripted transport used by the unit and integration tests.
//!
//! Time only moves when the sampler reads the ADC (`read_cost` µs per
//! conversion), sleeps, or asks the clock (`clock_step` µs per call), so
//! pacing arithmetic can be checked exactly.

#![allow(dead_code)]

#[cfg(feature = "i2s")]
use crate::config::I2sConfig;
use crate::transport::Transport;
#[cfg(feature = "i2s")]
use crate::transport::DigitalTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    BadPin,
    Adc,
    #[cfg(feature = "i2s")]
    Bus,
}

pub const LOG_LEN: usize = 512;

pub struct MockTransport {
    pub now: u32,
    pub clock_step: u32,
    pub read_cost: u32,

    pub analog_pin: Option<u8>,
    /// Value of the `n`th conversion.
    pub analog_fn: fn(usize) -> i32,
    pub reads: usize,
    pub fail_read_at: Option<usize>,

    pub sleeps: usize,
    pub slept_us: u64,
    pub last_sleep: Option<u32>,

    #[cfg(feature = "i2s")]
    pub input: Option<I2sConfig>,
    #[cfg(feature = "i2s")]
    pub output: Option<I2sConfig>,
    /// When set, captured frames replay the written words.
    #[cfg(feature = "i2s")]
    pub loopback: bool,
    #[cfg(feature = "i2s")]
    pub frames_read: usize,
    #[cfg(feature = "i2s")]
    pub fail_bus: bool,
    #[cfg(feature = "i2s")]
    pub written: [u16; LOG_LEN],
    #[cfg(feature = "i2s")]
    pub written_len: usize,
    #[cfg(feature = "i2s")]
    pub queued: usize,
    #[cfg(feature = "i2s")]
    pub flushes: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            now: 0,
            clock_step: 0,
            read_cost: 10,
            analog_pin: None,
            analog_fn: |n| n as i32,
            reads: 0,
            fail_read_at: None,
            sleeps: 0,
            slept_us: 0,
            last_sleep: None,
            #[cfg(feature = "i2s")]
            input: None,
            #[cfg(feature = "i2s")]
            output: None,
            #[cfg(feature = "i2s")]
            loopback: false,
            #[cfg(feature = "i2s")]
            frames_read: 0,
            #[cfg(feature = "i2s")]
            fail_bus: false,
            #[cfg(feature = "i2s")]
            written: [0; LOG_LEN],
            #[cfg(feature = "i2s")]
            written_len: 0,
            #[cfg(feature = "i2s")]
            queued: 0,
            #[cfg(feature = "i2s")]
            flushes: 0,
        }
    }

    pub fn with_read_cost(mut self, us: u32) -> Self {
        self.read_cost = us;
        self
    }

    pub fn with_clock_step(mut self, us: u32) -> Self {
        self.clock_step = us;
        self
    }

    pub fn with_analog(mut self, f: fn(usize) -> i32) -> Self {
        self.analog_fn = f;
        self
    }

    /// Words written so far.
    #[cfg(feature = "i2s")]
    pub fn written(&self) -> &[u16] {
        &self.written[..self.written_len]
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn setup_analog(&mut self, pin: u8) -> Result<(), Self::Error> {
        if pin > 29 {
            return Err(MockError::BadPin);
        }
        self.analog_pin = Some(pin);
        Ok(())
    }

    fn read_raw_analog(&mut self) -> Result<i32, Self::Error> {
        if self.fail_read_at == Some(self.reads) {
            return Err(MockError::Adc);
        }
        let v = (self.analog_fn)(self.reads);
        self.reads += 1;
        self.now = self.now.wrapping_add(self.read_cost);
        Ok(v)
    }

    fn now_micros(&mut self) -> u32 {
        let t = self.now;
        self.now = self.now.wrapping_add(self.clock_step);
        t
    }

    fn sleep_micros(&mut self, us: u32) {
        self.sleeps += 1;
        self.slept_us += u64::from(us);
        self.last_sleep = Some(us);
        self.now = self.now.wrapping_add(us);
    }
}

#[cfg(feature = "i2s")]
impl DigitalTransport for MockTransport {
    fn setup_digital_input(&mut self, config: &I2sConfig) -> Result<(), Self::Error> {
        self.input = Some(*config);
        Ok(())
    }

    fn setup_digital_output(&mut self, config: &I2sConfig) -> Result<(), Self::Error> {
        self.output = Some(*config);
        Ok(())
    }

    fn digital_read_frame(&mut self) -> Result<(i32, i32), Self::Error> {
        if self.fail_bus {
            return Err(MockError::Bus);
        }
        let i = self.frames_read;
        self.frames_read += 1;

        if self.loopback {
            // Undo the default capture offset so reduction returns the word.
            let word = |w: u16| (i32::from(w) - 32_768) << 16;
            let left = self.written[(2 * i) % LOG_LEN];
            let right = self.written[(2 * i + 1) % LOG_LEN];
            return Ok((word(left), word(right)));
        }

        let i = i as i32;
        Ok((i << 16, -i << 16))
    }

    fn digital_write_sample(&mut self, sample: u16) -> Result<(), Self::Error> {
        if self.fail_bus {
            return Err(MockError::Bus);
        }
        self.written[self.written_len % LOG_LEN] = sample;
        self.written_len += 1;
        self.queued += 1;
        Ok(())
    }

    fn digital_flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_bus {
            return Err(MockError::Bus);
        }
        self.queued = 0;
        self.flushes += 1;
        Ok(())
    }
}
