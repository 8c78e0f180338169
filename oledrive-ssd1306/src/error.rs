//! Session errors

use core::fmt;

use crate::frame::InitStep;

/// Errors surfaced by [`crate::ControllerSession`]
///
/// `E` is the transport's own error type. A device that simply does not
/// answer a probe is not an error; see [`crate::ControllerSession::is_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A bring-up frame was not delivered; later steps were not sent
    Transport {
        /// Step whose frame failed
        step: InitStep,
        /// Transport error
        source: E,
    },
    /// The presence probe itself faulted
    Probe(E),
}

impl<E> Error<E> {
    /// Bring-up step that failed, if any
    pub fn step(&self) -> Option<InitStep> {
        match self {
            Error::Transport { step, .. } => Some(*step),
            Error::Probe(_) => None,
        }
    }

    /// Underlying transport error
    pub fn source(&self) -> &E {
        match self {
            Error::Transport { source, .. } | Error::Probe(source) => source,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { step, source } => {
                write!(f, "init step {:?} failed: {:?}", step, source)
            }
            Error::Probe(source) => write!(f, "presence probe failed: {:?}", source),
        }
    }
}
