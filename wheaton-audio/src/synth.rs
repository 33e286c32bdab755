//! Sine test tones.
//!
//! [`Tone`] fills a buffer with integer samples of
//! `offset + amplitude * sin(2π f i / rate + phase)`, rounded to nearest.
//! Useful for beeps on an I2S amplifier and for checking the analyzers.

use core::f64::consts::PI;

use crate::error::Error;

/// A sine tone description.
///
/// # Example
/// ```ignore
/// let mut beep = [0i32; 1600];
/// Tone::new(440.0, 8000.0).with_offset(32768).fill(&mut beep, 16_000)?;
/// audio.play_digital(&beep)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f32,
    /// Peak deviation from `offset`, in sample codes.
    pub amplitude: f32,
    /// Centre value.
    pub offset: i32,
    /// Starting phase in degrees.
    pub phase: f32,
}

impl Tone {
    /// Tone centred on zero, starting at phase 0.
    pub const fn new(frequency: f32, amplitude: f32) -> Self {
        Tone {
            frequency,
            amplitude,
            offset: 0,
            phase: 0.0,
        }
    }

    pub const fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the starting phase in degrees (0–360).
    pub const fn with_phase(mut self, degrees: f32) -> Self {
        self.phase = degrees;
        self
    }

    /// Sample `i` of this tone at `sample_rate`.
    fn at(&self, i: usize, sample_rate: u32) -> i32 {
        let t = i as f64 / f64::from(sample_rate);
        let theta = 2.0 * PI * f64::from(self.frequency) * t + f64::from(self.phase).to_radians();
        let v = libm::round(f64::from(self.amplitude) * libm::sin(theta));
        self.offset.wrapping_add(v as i32)
    }

    /// Overwrite `buf` with consecutive samples of this tone.
    pub fn fill(&self, buf: &mut [i32], sample_rate: u32) -> Result<(), Error> {
        if buf.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }

        for (i, s) in buf.iter_mut().enumerate() {
            *s = self.at(i, sample_rate);
        }
        Ok(())
    }
}
