use core::time::Duration;
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Default epoch: Monday, July 4, 2016 00:00:00 UTC
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_467_590_400_000);

/// A trait for wall-clock sources.
///
/// Implementations return the current time in **milliseconds since the Unix
/// epoch**. The generator subtracts its configured epoch itself, so a time
/// source never needs to know about it.
///
/// Plug in [`SystemClock`] for real use, or a mocked source in tests.
///
/// # Example
///
/// ```
/// use ssid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

/// Reads [`SystemTime::now`] on every call.
///
/// No skew correction is applied: if the system clock jumps backwards, the
/// generator simply keeps its last observed timestamp until the clock catches
/// up again.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epoch_is_july_fourth_2016() {
        assert_eq!(DEFAULT_EPOCH.as_secs(), 1_467_590_400);
    }

    #[test]
    fn system_clock_is_past_default_epoch() {
        let now = SystemClock.current_millis();
        assert!(u128::from(now) > DEFAULT_EPOCH.as_millis());
    }

    #[test]
    fn shared_sources_delegate() {
        struct FixedTime;
        impl TimeSource for FixedTime {
            fn current_millis(&self) -> u64 {
                99
            }
        }

        let shared = Arc::new(FixedTime);
        assert_eq!(shared.current_millis(), 99);
        assert_eq!((&FixedTime).current_millis(), 99);
    }
}
