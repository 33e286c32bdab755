//! Stereo frame reduction and expansion.
//!
//! ## Capture
//!
//! A captured frame is `(left, right)`, each a 32-bit word with the audio in
//! the most significant bits. Reduction keeps one channel, shifts it right
//! (arithmetic shift, so the sign is kept) and adds an offset:
//!
//! ```text
//! mono = (frame[channel] >> shift) + offset
//! ```
//!
//! With the defaults (`shift = 16`, `offset = 32768`) a full-scale signed
//! word lands in `0..=65535`, centred on 32768.
//!
//! ## Playback
//!
//! Buffers hold `i32`; the transmitter takes `u16`. Conversion truncates to
//! the low 16 bits, so out-of-range values wrap instead of clamping.

use crate::config::{Channel, I2sConfig};

/// Reduce one captured stereo frame to a mono sample.
#[inline]
pub fn reduce_frame(frame: (i32, i32), config: &I2sConfig) -> i32 {
    let word = match config.channel {
        Channel::Left => frame.0,
        Channel::Right => frame.1,
    };
    let shift = u32::from(config.shift).min(31);
    (word >> shift).wrapping_add(config.offset)
}

/// Truncate a buffer sample to a 16-bit output word.
#[inline(always)]
pub fn output_word(sample: i32) -> u16 {
    sample as u16
}

/// Expand a mono sample to the `[left, right]` words of one output frame.
#[inline]
pub fn stereo_words(sample: i32) -> [u16; 2] {
    let w = output_word(sample);
    [w, w]
}
