//! Setup-time configuration.
//!
//! A [`SamplerConfig`] is assembled by
//! [`SamplerBuilder`](crate::sampler::SamplerBuilder) and frozen once the
//! sampler is built.

#[cfg(feature = "i2s")]
use crate::constants::{
    DEFAULT_I2S_SAMPLE_RATE, I2S_INPUT_BITS, I2S_INPUT_OFFSET, I2S_INPUT_SHIFT, I2S_OUTPUT_BITS,
};

/// Which half of a stereo frame to keep when reducing to mono.
#[cfg(feature = "i2s")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Left,
    Right,
}

/// I2S port configuration for either direction.
#[cfg(feature = "i2s")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sConfig {
    /// Serial data pin.
    pub data_pin: u8,
    /// Bit clock pin. The word-select pin is `bclk_pin + 1` on RP2040 boards.
    pub bclk_pin: u8,
    /// Word size on the wire.
    pub bits_per_sample: u8,
    /// Frame rate in Hz.
    pub sample_rate: u32,
    /// Channel kept when a captured frame is reduced to mono.
    pub channel: Channel,
    /// Right shift applied to captured words.
    pub shift: u8,
    /// Offset added to captured words after shifting.
    pub offset: i32,
}

#[cfg(feature = "i2s")]
impl I2sConfig {
    /// Capture configuration: 32-bit words at 16 kHz, left channel.
    pub const fn input(data_pin: u8, bclk_pin: u8) -> Self {
        I2sConfig {
            data_pin,
            bclk_pin,
            bits_per_sample: I2S_INPUT_BITS,
            sample_rate: DEFAULT_I2S_SAMPLE_RATE,
            channel: Channel::Left,
            shift: I2S_INPUT_SHIFT,
            offset: I2S_INPUT_OFFSET,
        }
    }

    /// Playback configuration: 16-bit words at 16 kHz.
    pub const fn output(data_pin: u8, bclk_pin: u8) -> Self {
        I2sConfig {
            data_pin,
            bclk_pin,
            bits_per_sample: I2S_OUTPUT_BITS,
            sample_rate: DEFAULT_I2S_SAMPLE_RATE,
            channel: Channel::Left,
            shift: 0,
            offset: 0,
        }
    }

    /// Override the frame rate.
    pub const fn with_sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate = hz;
        self
    }

    /// Override the channel kept on capture.
    pub const fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}

/// Frozen configuration of an [`AudioSampler`](crate::AudioSampler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Analog input pin, if analog capture was set up.
    pub analog_pin: Option<u8>,
    #[cfg(feature = "i2s")]
    pub i2s_input: Option<I2sConfig>,
    #[cfg(feature = "i2s")]
    pub i2s_output: Option<I2sConfig>,
}
