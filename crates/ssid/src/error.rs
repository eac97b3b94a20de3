use crate::Ssid;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ssid` can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured start time lies after the current time.
    #[error("start time is in the future")]
    InvalidStartTime,

    /// The generator ID does not fit in the generator ID field.
    #[error("invalid generator ID {generator_id}: the maximum is {}", Ssid::GENERATOR_ID_MASK)]
    InvalidGeneratorId { generator_id: u16 },

    /// A batch asked for more IDs than the sequence field can address.
    #[error("requested IDs ({requested}) exceed the maximum allowed: {}", Ssid::SEQUENCE_MASK)]
    SequenceLimitExceeded { requested: usize },

    /// The elapsed time since the epoch no longer fits in the timestamp
    /// field. The generator cannot produce any further IDs.
    #[error("reached the maximum time allowed")]
    TimeOverflow,

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

/// A batch request that stopped early.
///
/// Batches are not atomic: every ID minted before the failure is handed back
/// in [`BatchError::ids`], in generation order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("generated {} IDs before failing", .ids.len())]
pub struct BatchError {
    /// IDs produced before the failure.
    pub ids: Vec<Ssid>,
    /// The error that stopped the batch.
    #[source]
    pub source: Error,
}

impl BatchError {
    /// Splits the error into the partial batch and the underlying cause.
    pub fn into_parts(self) -> (Vec<Ssid>, Error) {
        (self.ids, self.source)
    }
}

impl From<Error> for BatchError {
    fn from(source: Error) -> Self {
        Self {
            ids: Vec::new(),
            source,
        }
    }
}
