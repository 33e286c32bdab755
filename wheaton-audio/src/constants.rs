/// Microseconds per second, used for pacing and rate measurement.
pub const MICROS_PER_SECOND: u32 = 1_000_000;

/// Default I2S sample rate in Hz, for both capture and playback.
pub const DEFAULT_I2S_SAMPLE_RATE: u32 = 16_000;

/// I2S capture word size in bits.
pub const I2S_INPUT_BITS: u8 = 32;

/// I2S playback word size in bits.
pub const I2S_OUTPUT_BITS: u8 = 16;

/// Right shift applied to a captured 32-bit I2S word.
///
/// Keeps the top 16 bits, which is where MEMS microphones put their data.
pub const I2S_INPUT_SHIFT: u8 = 16;

/// Offset added after the shift so captured samples sit in `0..=65535`,
/// centred on 32768.
pub const I2S_INPUT_OFFSET: i32 = 32_768;
