use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    /// The device task could not be spawned.
    #[cfg(feature = "pico1")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// A text source or output port was never bound.
    #[display("Collaborator not bound: {_0}")]
    MissingCollaborator(#[error(not(source))] MissingCollaborator),

    /// A GPIO write failed while shifting or latching the port.
    #[display("Error setting output state")]
    CannotSetOutputState,

    /// A port bit index past the end of the port.
    #[display("Index out of bounds")]
    IndexOutOfBounds,
}

/// Which collaborator(s) the multiplexer is still waiting for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MissingCollaborator {
    #[display("text source")]
    TextSource,
    #[display("output port")]
    OutputPort,
    #[display("text source and output port")]
    Both,
}

impl MissingCollaborator {
    /// Classifies which collaborators are unbound, or `None` when both are present.
    #[must_use]
    pub const fn check(has_text_source: bool, has_output_port: bool) -> Option<Self> {
        match (has_text_source, has_output_port) {
            (true, true) => None,
            (false, true) => Some(Self::TextSource),
            (true, false) => Some(Self::OutputPort),
            (false, false) => Some(Self::Both),
        }
    }
}

impl From<MissingCollaborator> for Error {
    fn from(missing: MissingCollaborator) -> Self {
        Self::MissingCollaborator(missing)
    }
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
