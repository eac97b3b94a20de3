use core::fmt;

/// A 63-bit SSID.
///
/// - 1 bit reserved (always zero, so the value fits a signed 64-bit integer)
/// - 40 bits timestamp (ms since the generator's epoch)
/// - 8 bits generator ID
/// - 15 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            23 22              15 14             0
///              +--------------+----------------+------------------+---------------+
///  Field:      | reserved (1) | timestamp (40) | generator ID (8) | sequence (15) |
///              +--------------+----------------+------------------+---------------+
///              |<------------ MSB ---------- 64 bits ----------- LSB ------------>|
/// ```
///
/// IDs from one generator sort by timestamp first, so their numeric order
/// follows wall-clock time at millisecond granularity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ssid {
    id: u64,
}

impl Ssid {
    /// Total number of meaningful bits. Bit 63 is reserved.
    pub const BITS: u32 = 63;

    /// Width of the timestamp field.
    pub const TIMESTAMP_BITS: u32 = 40;

    /// Width of the generator ID field.
    pub const GENERATOR_ID_BITS: u32 = 8;

    /// Width of the sequence field: whatever the other two fields leave.
    pub const SEQUENCE_BITS: u32 = Self::BITS - Self::TIMESTAMP_BITS - Self::GENERATOR_ID_BITS;

    /// Bitmask for extracting the 40-bit timestamp field. Occupies bits 23
    /// through 62.
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;

    /// Bitmask for extracting the 8-bit generator ID field. Occupies bits 15
    /// through 22.
    pub const GENERATOR_ID_MASK: u64 = (1 << Self::GENERATOR_ID_BITS) - 1;

    /// Bitmask for extracting the 15-bit sequence field. Occupies bits 0
    /// through 14.
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 23).
    pub const TIMESTAMP_SHIFT: u32 = Self::GENERATOR_ID_BITS + Self::SEQUENCE_BITS;

    /// Number of bits to shift the generator ID to its correct position (bit
    /// 15).
    pub const GENERATOR_ID_SHIFT: u32 = Self::SEQUENCE_BITS;

    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: u32 = 0;

    /// Packs the three fields, masking each to its width.
    pub const fn from(timestamp: u64, generator_id: u64, sequence: u64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let generator_id = (generator_id & Self::GENERATOR_ID_MASK) << Self::GENERATOR_ID_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | generator_id | sequence,
        }
    }

    /// Constructs a new ID from its components.
    ///
    /// In debug builds, panics if any component exceeds its field width.
    pub fn from_components(timestamp: u64, generator_id: u64, sequence: u64) -> Self {
        debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
        debug_assert!(generator_id <= Self::GENERATOR_ID_MASK, "generator_id overflow");
        debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
        Self::from(timestamp, generator_id, sequence)
    }

    /// Extracts the timestamp (ms since the epoch) from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the generator ID from the packed ID.
    pub const fn generator_id(&self) -> u64 {
        (self.id >> Self::GENERATOR_ID_SHIFT) & Self::GENERATOR_ID_MASK
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> u64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Returns the largest timestamp the layout can represent.
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    /// Returns the largest generator ID the layout can represent.
    pub const fn max_generator_id() -> u64 {
        Self::GENERATOR_ID_MASK
    }

    /// Returns the largest sequence value the layout can represent.
    pub const fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    /// Converts this ID into its raw integer representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Wraps a raw integer without validation. See [`Ssid::is_valid`].
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns `true` if the reserved top bit is clear.
    pub const fn is_valid(&self) -> bool {
        self.id >> Self::BITS == 0
    }

    /// Returns the absolute creation time in ms since the Unix epoch, given the
    /// epoch the ID was generated against.
    pub const fn unix_millis(&self, epoch_millis: u64) -> u64 {
        epoch_millis + self.timestamp()
    }

    /// Returns the ID as a zero-padded 19-digit string.
    ///
    /// 19 digits hold any 63-bit value, so padded strings sort the same way the
    /// IDs do.
    pub fn to_padded_string(&self) -> String {
        format!("{:019}", self.id)
    }
}

impl From<Ssid> for u64 {
    fn from(id: Ssid) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ssid")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("generator_id", &self.generator_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
