//! I2S frame conversion.
//!
//! The I2S receiver delivers stereo frames of two 32-bit words; the analysis
//! code works on one channel of plain integers. The transmitter takes 16-bit
//! words, one per channel, so mono buffers are written twice per frame.
//!
//! - [`frame`] — stereo → mono reduction and mono → stereo word expansion

pub mod frame;

pub use frame::{output_word, reduce_frame, stereo_words};
