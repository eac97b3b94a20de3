//! Serializes [`Ssid`] as its native integer.

use crate::Ssid;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for Ssid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Ssid {
    /// Rejects integers with the reserved top bit set.
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        let id = Self::from_raw(raw);
        if !id.is_valid() {
            return Err(de::Error::custom(format_args!(
                "{raw} does not fit in {} bits",
                Self::BITS
            )));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        let id = Ssid::from_components(7, 1, 2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, id.to_raw().to_string());

        let back: Ssid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn rejects_reserved_bit() {
        let json = (1u64 << 63).to_string();
        let err = serde_json::from_str::<Ssid>(&json).unwrap_err();
        assert!(err.to_string().contains("63 bits"));
    }
}
