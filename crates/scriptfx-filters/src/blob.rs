//! The persisted preset record.
//!
//! A stored filter configuration is a fixed-size binary record: a 32-bit
//! variant tag followed by a fixed-capacity, null-padded byte buffer
//! holding the serialized command string. The layout is part of the host's
//! persisted-state contract and must stay byte-compatible across versions;
//! that is also why decoding clamps instead of rejecting (see
//! [`crate::registry`]).
//!
//! ```text
//! offset 0     4                                  1028
//!        +-----+-----------------------------------+
//!        | tag | command bytes, NUL padded         |
//!        +-----+-----------------------------------+
//! ```

/// Capacity of the command buffer, including the terminating NUL.
pub const COMMAND_CAPACITY: usize = 1024;

/// Longest command string a record can hold, in bytes.
pub const MAX_COMMAND_LEN: usize = COMMAND_CAPACITY - 1;

/// One persisted filter configuration.
#[derive(Clone)]
pub struct StoredPreset {
    tag: u32,
    command: [u8; COMMAND_CAPACITY],
}

impl StoredPreset {
    /// Size of the wire representation in bytes.
    pub const WIRE_SIZE: usize = 4 + COMMAND_CAPACITY;

    /// Builds a record from a tag and a command string.
    ///
    /// Commands longer than [`MAX_COMMAND_LEN`] bytes are truncated on a
    /// character boundary rather than overflowing the buffer.
    pub fn new(tag: u32, command: &str) -> Self {
        let mut len = command.len().min(MAX_COMMAND_LEN);
        while !command.is_char_boundary(len) {
            len -= 1;
        }
        let mut buf = [0u8; COMMAND_CAPACITY];
        buf[..len].copy_from_slice(&command.as_bytes()[..len]);
        Self { tag, command: buf }
    }

    /// The variant tag.
    #[inline]
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// The stored command string, up to the first NUL.
    ///
    /// A record deserialized from bytes that are not valid UTF-8 reads as
    /// an empty command, which downstream decoding turns into the variant
    /// default.
    pub fn command(&self) -> &str {
        let len = self
            .command
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(COMMAND_CAPACITY);
        std::str::from_utf8(&self.command[..len]).unwrap_or("")
    }

    /// Serializes to the fixed wire layout (little-endian tag).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIRE_SIZE);
        out.extend_from_slice(&self.tag.to_le_bytes());
        out.extend_from_slice(&self.command);
        out
    }

    /// Reads a record back from its wire layout.
    ///
    /// Returns `None` when `bytes` is not exactly [`Self::WIRE_SIZE`] long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::WIRE_SIZE {
            return None;
        }
        let tag = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let mut command = [0u8; COMMAND_CAPACITY];
        command.copy_from_slice(&bytes[4..]);
        Some(Self { tag, command })
    }
}

impl PartialEq for StoredPreset {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.command[..] == other.command[..]
    }
}

impl Eq for StoredPreset {}

impl std::fmt::Debug for StoredPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredPreset")
            .field("tag", &self.tag)
            .field("command", &self.command())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_command() {
        let p = StoredPreset::new(2, "demo_sepia 50,-30,0");
        assert_eq!(p.tag(), 2);
        assert_eq!(p.command(), "demo_sepia 50,-30,0");
    }

    #[test]
    fn truncates_at_capacity() {
        let long = "x".repeat(2000);
        let p = StoredPreset::new(1, &long);
        assert_eq!(p.command().len(), MAX_COMMAND_LEN);
    }

    #[test]
    fn truncates_on_char_boundary() {
        // 1022 ASCII bytes followed by a 2-byte character straddling the cap
        let s = format!("{}é", "x".repeat(MAX_COMMAND_LEN - 1));
        let p = StoredPreset::new(1, &s);
        assert_eq!(p.command().len(), MAX_COMMAND_LEN - 1);
        assert!(p.command().chars().all(|c| c == 'x'));
    }

    #[test]
    fn wire_roundtrip() {
        let p = StoredPreset::new(7, "demo_cmd 1,2,3");
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), StoredPreset::WIRE_SIZE);
        let q = StoredPreset::from_bytes(&bytes).expect("exact size");
        assert_eq!(p, q);
    }

    #[test]
    fn rejects_wrong_wire_size() {
        assert!(StoredPreset::from_bytes(&[0u8; 12]).is_none());
    }

    #[test]
    fn invalid_utf8_reads_as_empty() {
        let mut bytes = StoredPreset::new(3, "abc").to_bytes();
        bytes[4] = 0xFF;
        let p = StoredPreset::from_bytes(&bytes).expect("exact size");
        assert_eq!(p.command(), "");
    }
}
