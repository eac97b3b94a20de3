use core::time::Duration;

use crate::{DEFAULT_EPOCH, Error, Result, Ssid};

/// Settings for a [`SsidGenerator`].
///
/// [`SsidGenerator`]: crate::SsidGenerator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SsidConfig {
    /// Identifies the emitting node. Must fit in
    /// [`Ssid::GENERATOR_ID_BITS`] bits.
    pub generator_id: u16,

    /// Epoch origin as a duration since the Unix epoch. `None` selects
    /// [`DEFAULT_EPOCH`].
    pub start_time: Option<Duration>,
}

impl SsidConfig {
    /// Creates a config for `generator_id` using the default epoch.
    pub const fn new(generator_id: u16) -> Self {
        Self {
            generator_id,
            start_time: None,
        }
    }

    /// Overrides the epoch origin.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: Duration) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// The effective epoch origin.
    pub fn epoch(&self) -> Duration {
        self.start_time.unwrap_or(DEFAULT_EPOCH)
    }

    /// Returns a copy with the default epoch filled in, as a generator built
    /// from this config would see it.
    #[must_use]
    pub fn resolve(&self) -> Self {
        Self {
            generator_id: self.generator_id,
            start_time: Some(self.epoch()),
        }
    }

    /// Checks the config against the current time `now_millis` (ms since the
    /// Unix epoch) and returns the epoch in milliseconds.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStartTime`] if the epoch lies after `now_millis`.
    /// - [`Error::InvalidGeneratorId`] if the generator ID does not fit in its
    ///   field.
    pub fn validate(&self, now_millis: u64) -> Result<u64> {
        let epoch_millis =
            u64::try_from(self.epoch().as_millis()).map_err(|_| Error::InvalidStartTime)?;
        if epoch_millis > now_millis {
            return Err(Error::InvalidStartTime);
        }

        if u64::from(self.generator_id) > Ssid::GENERATOR_ID_MASK {
            return Err(Error::InvalidGeneratorId {
                generator_id: self.generator_id,
            });
        }

        Ok(epoch_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn unset_start_time_uses_default_epoch() {
        let config = SsidConfig::new(1);
        assert_eq!(config.epoch(), DEFAULT_EPOCH);
        assert_eq!(config.resolve().start_time, Some(DEFAULT_EPOCH));
        assert_eq!(config.validate(NOW), Ok(1_467_590_400_000));
    }

    #[test]
    fn future_start_time_is_rejected() {
        let config = SsidConfig::new(0).with_start_time(Duration::from_millis(NOW + 1));
        assert_eq!(config.validate(NOW), Err(Error::InvalidStartTime));
    }

    #[test]
    fn start_time_equal_to_now_is_accepted() {
        let config = SsidConfig::new(0).with_start_time(Duration::from_millis(NOW));
        assert_eq!(config.validate(NOW), Ok(NOW));
    }

    #[test]
    fn generator_id_bounds() {
        assert!(SsidConfig::new(255).validate(NOW).is_ok());
        assert_eq!(
            SsidConfig::new(256).validate(NOW),
            Err(Error::InvalidGeneratorId { generator_id: 256 })
        );
    }

    #[test]
    fn start_time_is_checked_before_generator_id() {
        let config = SsidConfig::new(256).with_start_time(Duration::from_millis(NOW + 1));
        assert_eq!(config.validate(NOW), Err(Error::InvalidStartTime));
    }
}
