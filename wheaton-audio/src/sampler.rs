//! The audio sampler.
//!
//! [`AudioSampler`] owns a hardware transport and a frozen
//! [`SamplerConfig`]. It fills caller-owned buffers from the analog input
//! or the I2S receiver, and plays buffers out through the I2S transmitter.
//!
//! ## Setup
//!
//! ```ignore
//! let mut audio = AudioSampler::builder(transport)
//!     .analog_pin(26)?
//!     .i2s_input(I2sConfig::input(0, 1))?
//!     .i2s_output(I2sConfig::output(9, 10))?
//!     .build();
//! ```
//!
//! Each builder step runs the matching transport setup hook straight away,
//! like calling `setup_*` once at boot. After `build()` the configuration
//! cannot change.
//!
//! ## Analog pacing
//!
//! The analog input has no clock of its own, so
//! [`read_analog_sample`](AudioSampler::read_analog_sample) times each
//! conversion and sleeps for whatever is left of the sample period. A
//! conversion that takes longer than the period is not made up for later;
//! the achieved rate simply drops, and is what the call returns.
//!
//! ## Blocking
//!
//! Every call blocks until its loop is complete. There is no cancellation
//! and no internal locking: run the sampler on its own task if the rest of
//! the program must stay responsive.

use crate::analysis;
use crate::config::SamplerConfig;
use crate::constants::MICROS_PER_SECOND;
use crate::error::{Error, Interface};
use crate::transport::Transport;

#[cfg(feature = "i2s")]
use crate::config::I2sConfig;
#[cfg(feature = "i2s")]
use crate::io::frame::{reduce_frame, stereo_words};
#[cfg(feature = "i2s")]
use crate::transport::DigitalTransport;

/// Step-by-step setup of an [`AudioSampler`].
pub struct SamplerBuilder<T> {
    transport: T,
    config: SamplerConfig,
}

impl<T: Transport> SamplerBuilder<T> {
    /// Configure `pin` as the analog input.
    pub fn analog_pin(mut self, pin: u8) -> Result<Self, Error<T::Error>> {
        self.transport.setup_analog(pin).map_err(Error::Transport)?;
        debug!("analog input on pin {}", pin);
        self.config.analog_pin = Some(pin);
        Ok(self)
    }

    /// Finish setup.
    pub fn build(self) -> AudioSampler<T> {
        AudioSampler {
            transport: self.transport,
            config: self.config,
        }
    }
}

#[cfg(feature = "i2s")]
impl<T: DigitalTransport> SamplerBuilder<T> {
    /// Start the I2S receiver.
    pub fn i2s_input(mut self, config: I2sConfig) -> Result<Self, Error<T::Error>> {
        self.transport
            .setup_digital_input(&config)
            .map_err(Error::Transport)?;
        debug!(
            "i2s input: data {}, bclk {}, {} bits @ {} Hz",
            config.data_pin,
            config.bclk_pin,
            config.bits_per_sample,
            config.sample_rate
        );
        self.config.i2s_input = Some(config);
        Ok(self)
    }

    /// Start the I2S transmitter.
    pub fn i2s_output(mut self, config: I2sConfig) -> Result<Self, Error<T::Error>> {
        self.transport
            .setup_digital_output(&config)
            .map_err(Error::Transport)?;
        debug!(
            "i2s output: data {}, bclk {}, {} bits @ {} Hz",
            config.data_pin,
            config.bclk_pin,
            config.bits_per_sample,
            config.sample_rate
        );
        self.config.i2s_output = Some(config);
        Ok(self)
    }
}

/// Audio sampler and analyzer.
///
/// With a plain [`Transport`] only analog capture is available. With a
/// [`DigitalTransport`](crate::DigitalTransport) (feature `i2s`) the I2S
/// capture and playback methods appear as well.
pub struct AudioSampler<T> {
    transport: T,
    config: SamplerConfig,
}

impl<T: Transport> AudioSampler<T> {
    pub fn builder(transport: T) -> SamplerBuilder<T> {
        SamplerBuilder {
            transport,
            config: SamplerConfig::default(),
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Fill `sample` from the analog input, paced to approximate
    /// `target_sample_rate` Hz.
    ///
    /// Returns the achieved rate, `1_000_000 * n / elapsed_us`, truncated.
    /// Blocks for roughly `n / target_sample_rate` seconds.
    pub fn read_analog_sample(
        &mut self,
        sample: &mut [i32],
        target_sample_rate: u32,
    ) -> Result<u32, Error<T::Error>> {
        if self.config.analog_pin.is_none() {
            return Err(Error::NotConfigured(Interface::Analog));
        }
        if sample.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        if target_sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }

        let target_delay = MICROS_PER_SECOND / target_sample_rate;
        let t = &mut self.transport;
        let mut late = 0u32;

        let tic = t.now_micros();
        for slot in sample.iter_mut() {
            let start = t.now_micros();
            *slot = t.read_raw_analog().map_err(Error::Transport)?;
            let elapsed = t.now_micros().wrapping_sub(start);
            if elapsed < target_delay {
                t.sleep_micros(target_delay - elapsed);
            } else {
                late += 1;
            }
        }
        let total = t.now_micros().wrapping_sub(tic);

        if total == 0 {
            warn!("analog capture: clock did not advance over {} samples", sample.len());
            return Err(Error::ClockStalled);
        }

        let rate = u64::from(MICROS_PER_SECOND) * sample.len() as u64 / u64::from(total);
        let rate = u32::try_from(rate).unwrap_or(u32::MAX);
        if late > 0 {
            trace!("analog capture: {} of {} samples overran the period", late, sample.len());
        }
        debug!(
            "analog capture: {} samples at {} Hz (target {})",
            sample.len(),
            rate,
            target_sample_rate
        );
        Ok(rate)
    }

    /// See [`analysis::find_average`].
    pub fn find_average(&self, sample: &[i32]) -> Result<f32, Error<T::Error>> {
        analysis::find_average(sample).map_err(Error::widen)
    }

    /// See [`analysis::find_amplitude`].
    pub fn find_amplitude(&self, sample: &[i32]) -> Result<f32, Error<T::Error>> {
        analysis::find_amplitude(sample).map_err(Error::widen)
    }

    /// See [`analysis::find_frequency`].
    pub fn find_frequency(
        &self,
        sample: &[i32],
        sample_rate: u32,
    ) -> Result<f32, Error<T::Error>> {
        analysis::find_frequency(sample, sample_rate).map_err(Error::widen)
    }

    /// See [`analysis::find_amp_of_frequency`].
    pub fn find_amp_of_frequency(
        &self,
        sample: &[i32],
        sample_rate: u32,
        frequency: f32,
    ) -> Result<f32, Error<T::Error>> {
        analysis::find_amp_of_frequency(sample, sample_rate, frequency).map_err(Error::widen)
    }
}

#[cfg(feature = "i2s")]
impl<T: DigitalTransport> AudioSampler<T> {
    /// Fill `sample` from the I2S receiver.
    ///
    /// Each stereo frame is reduced to one channel, shifted and offset per
    /// the input [`I2sConfig`]. The receiver paces itself, so this returns
    /// the configured rate rather than a measured one.
    pub fn read_digital_sample(&mut self, sample: &mut [i32]) -> Result<u32, Error<T::Error>> {
        let config = self
            .config
            .i2s_input
            .ok_or(Error::NotConfigured(Interface::I2sInput))?;
        if sample.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        for slot in sample.iter_mut() {
            let frame = self
                .transport
                .digital_read_frame()
                .map_err(Error::Transport)?;
            *slot = reduce_frame(frame, &config);
        }

        Ok(config.sample_rate)
    }

    /// Write `sample` to the I2S transmitter, each value on both channels.
    ///
    /// Values are truncated to 16 bits, so anything outside `0..=65535`
    /// wraps. Returns once the last word is queued; call
    /// [`wait`](Self::wait) to block until it has been sent.
    pub fn play_digital(&mut self, sample: &[i32]) -> Result<(), Error<T::Error>> {
        if self.config.i2s_output.is_none() {
            return Err(Error::NotConfigured(Interface::I2sOutput));
        }
        if sample.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        for &s in sample {
            for word in stereo_words(s) {
                self.transport
                    .digital_write_sample(word)
                    .map_err(Error::Transport)?;
            }
        }
        Ok(())
    }

    /// Block until the I2S transmitter has sent everything queued.
    pub fn wait(&mut self) -> Result<(), Error<T::Error>> {
        if self.config.i2s_output.is_none() {
            return Err(Error::NotConfigured(Interface::I2sOutput));
        }
        self.transport.digital_flush().map_err(Error::Transport)
    }
}
