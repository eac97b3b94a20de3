use core::time::Duration;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    BatchError, Error, Result, Ssid, SsidConfig, SystemClock, TimeSource, generator::Mutex,
};

/// Mutable clock/sequence state, only touched under the generator's lock.
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Milliseconds since the epoch as of the most recent mint.
    pub(crate) elapsed: u64,
    /// Rolling sequence counter in `0..=Ssid::SEQUENCE_MASK`.
    pub(crate) sequence: u64,
}

/// A lock-based SSID generator, safe to share across threads.
///
/// Every mint runs under a mutex that guards the last observed timestamp and
/// the sequence counter. Wrap the generator in an [`Arc`] to hand it to
/// multiple threads; batches from different callers may interleave.
///
/// The sequence counter advances on **every** mint and wraps modulo
/// `2^15`. It is not reset when the millisecond changes. IDs stay strictly
/// increasing as long as fewer than `2^15` IDs are minted within a single
/// millisecond.
///
/// [`Arc`]: std::sync::Arc
#[derive(Debug)]
pub struct SsidGenerator<T = SystemClock>
where
    T: TimeSource,
{
    pub(crate) state: Mutex<State>,
    epoch_millis: u64,
    generator_id: u64,
    time: T,
}

impl SsidGenerator<SystemClock> {
    /// Creates a generator reading the system clock.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStartTime`] if `config.start_time` is in the future.
    /// - [`Error::InvalidGeneratorId`] if `config.generator_id` exceeds
    ///   [`Ssid::GENERATOR_ID_MASK`].
    ///
    /// # Example
    /// ```
    /// use ssid::{SsidConfig, SsidGenerator};
    ///
    /// let generator = SsidGenerator::new(&SsidConfig::new(3)).unwrap();
    /// let id = generator.try_next_id().unwrap();
    /// assert_eq!(id.generator_id(), 3);
    /// ```
    pub fn new(config: &SsidConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T> SsidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator that reads time from `time`.
    ///
    /// The clock is read once to validate the start time. The state starts
    /// with a zero timestamp and a zero sequence.
    ///
    /// # Errors
    ///
    /// Same as [`SsidGenerator::new`].
    pub fn with_clock(config: &SsidConfig, time: T) -> Result<Self> {
        let epoch_millis = config.validate(time.current_millis())?;
        Ok(Self {
            state: Mutex::new(State::default()),
            epoch_millis,
            generator_id: u64::from(config.generator_id),
            time,
        })
    }

    /// The generator ID encoded into every ID.
    pub const fn generator_id(&self) -> u64 {
        self.generator_id
    }

    /// The epoch origin as a duration since the Unix epoch.
    pub const fn epoch(&self) -> Duration {
        Duration::from_millis(self.epoch_millis)
    }

    /// Generates the next ID.
    ///
    /// The sequence always advances. The timestamp moves forward only when the
    /// clock has advanced past the last observed millisecond, so it never goes
    /// backwards even if the clock does.
    ///
    /// # Errors
    ///
    /// - [`Error::TimeOverflow`] once the elapsed time no longer fits in
    ///   [`Ssid::TIMESTAMP_BITS`] bits. Every later call fails the same way.
    /// - [`Error::LockPoisoned`] if another thread panicked while holding the
    ///   lock (std mutex only).
    ///
    /// # Example
    /// ```
    /// use ssid::{SsidConfig, SsidGenerator};
    ///
    /// let generator = SsidGenerator::new(&SsidConfig::default()).unwrap();
    /// let first = generator.try_next_id().unwrap();
    /// let second = generator.try_next_id().unwrap();
    /// assert!(second > first);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<Ssid> {
        let mut state = {
            #[cfg(feature = "parking-lot")]
            {
                self.state.lock()
            }
            #[cfg(not(feature = "parking-lot"))]
            {
                self.state.lock()?
            }
        };

        let now = self.time.current_millis().saturating_sub(self.epoch_millis);
        state.sequence = (state.sequence + 1) & Ssid::SEQUENCE_MASK;
        if now > state.elapsed {
            state.elapsed = now;
        }

        if state.elapsed > Ssid::TIMESTAMP_MASK {
            return Err(Self::cold_time_overflow(state.elapsed));
        }

        Ok(Ssid::from_components(
            state.elapsed,
            self.generator_id,
            state.sequence,
        ))
    }

    /// Generates `count` IDs, one lock acquisition per ID.
    ///
    /// IDs are returned in generation order. `count` may not exceed
    /// [`Ssid::SEQUENCE_MASK`].
    ///
    /// # Errors
    ///
    /// Returns a [`BatchError`] wrapping:
    /// - [`Error::SequenceLimitExceeded`] with no IDs if `count` is too large.
    /// - the first error from [`SsidGenerator::try_next_id`], together with
    ///   every ID generated before it.
    ///
    /// # Example
    /// ```
    /// use ssid::{Error, Ssid, SsidConfig, SsidGenerator};
    ///
    /// let generator = SsidGenerator::new(&SsidConfig::default()).unwrap();
    /// assert_eq!(generator.try_next_ids(100).unwrap().len(), 100);
    ///
    /// let err = generator.try_next_ids(Ssid::SEQUENCE_MASK as usize + 1).unwrap_err();
    /// assert!(err.ids.is_empty());
    /// assert!(matches!(err.source, Error::SequenceLimitExceeded { .. }));
    /// ```
    pub fn try_next_ids(&self, count: usize) -> Result<Vec<Ssid>, BatchError> {
        if count > Ssid::SEQUENCE_MASK as usize {
            return Err(Error::SequenceLimitExceeded { requested: count }.into());
        }

        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            match self.try_next_id() {
                Ok(id) => ids.push(id),
                Err(source) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        generated = ids.len(),
                        requested = count,
                        %source,
                        "batch stopped early"
                    );
                    return Err(BatchError { ids, source });
                }
            }
        }
        Ok(ids)
    }

    #[cold]
    #[inline(never)]
    fn cold_time_overflow(_elapsed: u64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            elapsed = _elapsed,
            max = Ssid::TIMESTAMP_MASK,
            "timestamp field exhausted"
        );
        Error::TimeOverflow
    }
}
