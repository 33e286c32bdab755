//! Scalar analysis over a sample buffer.
//!
//! All functions are pure: they borrow the buffer, never modify it, and give
//! the same answer every time for the same contents. Each rejects an empty
//! buffer with [`Error::EmptyBuffer`].
//!
//! ## Integer mean
//!
//! The mean used throughout is computed in integer arithmetic and truncated
//! toward zero before it is widened to a float. For microphone codes the
//! true mean is close to an integer anyway, but `[1, 2]` averages to `1.0`,
//! not `1.5`. [`find_amplitude`] and [`find_frequency`] subtract this same
//! truncated mean.

use core::f64::consts::PI;

use crate::error::Error;

fn check_len(sample: &[i32]) -> Result<usize, Error> {
    match sample.len() {
        0 => Err(Error::EmptyBuffer),
        n => Ok(n),
    }
}

/// Integer mean, truncated toward zero.
fn integer_mean(sample: &[i32]) -> i64 {
    let sum: i64 = sample.iter().map(|&s| i64::from(s)).sum();
    sum / sample.len() as i64
}

/// Arithmetic mean of the buffer, truncated to an integer before being
/// returned as `f32`.
pub fn find_average(sample: &[i32]) -> Result<f32, Error> {
    check_len(sample)?;
    Ok(integer_mean(sample) as f32)
}

/// Loudness: root-mean-square deviation from [`find_average`].
///
/// `sqrt(sum((x - avg)^2) / n)`
pub fn find_amplitude(sample: &[i32]) -> Result<f32, Error> {
    let n = check_len(sample)?;
    let avg = integer_mean(sample) as f64;

    let mut sum_sq = 0.0f64;
    for &s in sample {
        let d = f64::from(s) - avg;
        sum_sq += d * d;
    }

    Ok(libm::sqrt(sum_sq / n as f64) as f32)
}

/// Number of sign changes of `x - avg` between consecutive samples.
///
/// A sample equal to the mean is neither positive nor negative: a step
/// into or out of it is not a crossing, so `[-1, 0, 1]` around a zero mean
/// counts nothing.
pub fn count_zero_crossings(sample: &[i32]) -> Result<u32, Error> {
    check_len(sample)?;
    let avg = integer_mean(sample);

    let mut crossings = 0;
    let mut prev = i64::from(sample[0]) - avg;
    for &s in sample {
        let this = i64::from(s) - avg;
        if (this > 0 && prev < 0) || (this < 0 && prev > 0) {
            crossings += 1;
        }
        prev = this;
    }

    Ok(crossings)
}

/// Fundamental frequency estimate in Hz from the zero-crossing count.
///
/// Each period of a sinusoid crosses the mean twice, so
/// `frequency = sample_rate * crossings / 2 / n`.
///
/// No filtering or interpolation is done. Noisy or multi-tone signals cross
/// the mean more often than their fundamental does and read high; signals
/// that sit exactly on the mean between lobes read low.
pub fn find_frequency(sample: &[i32], sample_rate: u32) -> Result<f32, Error> {
    if sample_rate == 0 {
        return Err(Error::InvalidSampleRate);
    }
    let crossings = count_zero_crossings(sample)?;
    let n = sample.len() as f64;

    Ok((f64::from(sample_rate) * f64::from(crossings) / 2.0 / n) as f32)
}

/// Loudness of one frequency, as a peak-amplitude estimate.
///
/// Runs a single-bin Goertzel filter over the mean-removed buffer and scales
/// the bin magnitude by `2 / n`, so a pure tone of amplitude `A` whose
/// frequency falls on a bin (`frequency * n / sample_rate` integral) reads
/// close to `A`. Off-bin tones leak into neighbouring frequencies and read
/// lower. Frequencies above Nyquist alias.
pub fn find_amp_of_frequency(
    sample: &[i32],
    sample_rate: u32,
    frequency: f32,
) -> Result<f32, Error> {
    let n = check_len(sample)?;
    if sample_rate == 0 {
        return Err(Error::InvalidSampleRate);
    }

    let avg = integer_mean(sample) as f64;
    let omega = 2.0 * PI * f64::from(frequency) / f64::from(sample_rate);
    let coeff = 2.0 * libm::cos(omega);

    let mut s1 = 0.0f64;
    let mut s2 = 0.0f64;
    for &x in sample {
        let s0 = (f64::from(x) - avg) + coeff * s1 - s2;
        s2 = s1;
        s1 = s0;
    }

    // Rounding can push this a hair below zero for a silent bin.
    let power = (s1 * s1 + s2 * s2 - coeff * s1 * s2).max(0.0);
    Ok((2.0 * libm::sqrt(power) / n as f64) as f32)
}
