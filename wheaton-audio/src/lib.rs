//! # wheaton-audio
//!
//! A `no_std`, zero-allocation helper library for reading and analyzing audio
//! on microcontroller-class hardware, aimed at small robotics projects.
//!
//! It samples an analog or I2S input into a caller-owned buffer, computes
//! simple statistics over that buffer (mean, loudness, zero-crossing
//! fundamental frequency, loudness of one frequency) and plays a buffer back
//! out over an I2S output.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Hardware | [`transport`] | `Transport` / `DigitalTransport` traits and adapters |
//! | Config | [`config`] / [`constants`] | Pin numbers, I2S formats, default rates |
//! | Acquisition | [`sampler`] | Paced analog capture, I2S capture and playback |
//! | Frames | [`io`] | Stereo frame reduction and mono duplication |
//! | Analysis | [`analysis`] | Average, amplitude, frequency, Goertzel bin |
//! | Synthesis | [`synth`] | Sine test tones |
//!
//! ## Quick start
//!
//! ```ignore
//! use wheaton_audio::{AudioSampler, HalTransport};
//!
//! let transport = HalTransport::new(adc, clock, delay);
//! let mut audio = AudioSampler::builder(transport).analog_pin(26)?.build();
//!
//! let mut sample = [0i32; 256];
//! let rate = audio.read_analog_sample(&mut sample, 8000)?;
//!
//! let loudness = wheaton_audio::analysis::find_amplitude(&sample)?;
//! let pitch = wheaton_audio::analysis::find_frequency(&sample, rate)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `hal` | yes | [`HalTransport`] built on `embedded-hal` 1.0 |
//! | `i2s` | yes | I2S capture and playback ([`DigitalTransport`]) |
//! | `defmt` | no | `defmt::Format` derives and log statements |
//!
//! ## Timing
//!
//! Every acquisition and playback call blocks until its loop is done. Analog
//! pacing is a plain blocking wait: it gives soft real-time behaviour only,
//! with no catch-up after an overrun and no cancellation.

#![no_std]

#[macro_use]
mod fmt;

pub mod analysis;
pub mod config;
pub mod constants;
pub mod error;
pub mod sampler;
pub mod synth;
pub mod transport;

#[cfg(feature = "i2s")]
pub mod io;

#[cfg(test)]
mod testing;


pub use config::SamplerConfig;
pub use error::{Error, Interface};
pub use sampler::{AudioSampler, SamplerBuilder};
pub use transport::{AnalogRead, MicrosClock, Transport};

#[cfg(feature = "hal")]
pub use transport::HalTransport;

#[cfg(feature = "i2s")]
pub use config::{Channel, I2sConfig};

#[cfg(feature = "i2s")]
pub use transport::{DigitalTransport, I2sPort, PortError, WithI2s};
