//! Error type shared by acquisition, playback and analysis.

use core::convert::Infallible;
use core::fmt;

/// Hardware interface a call needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interface {
    /// Analog input pin.
    Analog,
    /// I2S capture.
    I2sInput,
    /// I2S playback.
    I2sOutput,
}

/// Errors reported by this crate.
///
/// `E` is the error type of the hardware transport. Pure analysis functions
/// never touch hardware and use the default, [`Infallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = Infallible> {
    /// The sample buffer has length zero.
    EmptyBuffer,
    /// A sample rate of zero was requested or supplied.
    InvalidSampleRate,
    /// The microsecond clock did not advance during acquisition, so no
    /// rate can be computed.
    ClockStalled,
    /// The interface was used without being configured on the builder.
    NotConfigured(Interface),
    /// The underlying transport failed.
    Transport(E),
}

impl<E> Error<E> {
    /// Convert an analysis error into one carrying a transport error type.
    pub fn widen(err: Error<Infallible>) -> Self {
        match err {
            Error::EmptyBuffer => Error::EmptyBuffer,
            Error::InvalidSampleRate => Error::InvalidSampleRate,
            Error::ClockStalled => Error::ClockStalled,
            Error::NotConfigured(i) => Error::NotConfigured(i),
            Error::Transport(never) => match never {},
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyBuffer => f.write_str("sample buffer is empty"),
            Error::InvalidSampleRate => f.write_str("sample rate must be non-zero"),
            Error::ClockStalled => f.write_str("clock did not advance during acquisition"),
            Error::NotConfigured(i) => write!(f, "{:?} interface is not configured", i),
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
        }
    }
}
