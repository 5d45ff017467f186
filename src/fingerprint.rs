//! 256-bit change fingerprint for palette contents.
//!
//! The fingerprint is an equality-only cache key: two equal fingerprints are
//! taken to mean the palette is unchanged and the GPU copy can be skipped.
//! It carries no cryptographic guarantee. The emulation core normally
//! supplies the fingerprint alongside texture memory each frame;
//! [`Fingerprint::of_tlut`] is a convenience for hosts that do not track
//! their own checksum.

use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::tlut::TlutView;

/// 256-bit fingerprint of the TLUT bank contents.
///
/// A freshly constructed palette texture stores [`Fingerprint::ZERO`], so
/// the first real fingerprint always triggers an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fingerprint([u64; 4]);

impl Fingerprint {
    /// The all-zero fingerprint held before the first upload.
    pub const ZERO: Self = Self([0; 4]);

    /// Fingerprint from raw lanes.
    #[must_use]
    pub fn from_lanes(lanes: [u64; 4]) -> Self {
        Self(lanes)
    }

    /// The raw 64-bit lanes.
    #[must_use]
    pub fn lanes(&self) -> [u64; 4] {
        self.0
    }

    /// Change-detection gate: store `next` and return `true` if it differs
    /// from the current value, otherwise leave the value untouched and
    /// return `false`.
    pub fn replace_if_changed(&mut self, next: Self) -> bool {
        if *self == next {
            false
        } else {
            *self = next;
            true
        }
    }

    /// Digest the TLUT bank into a fingerprint.
    ///
    /// Four lane-seeded `FxHasher` passes over the bank bytes. Fast and
    /// collision-tolerant, matching the equality-only contract.
    #[must_use]
    pub fn of_tlut(tlut: &TlutView<'_>) -> Self {
        let mut lanes = [0_u64; 4];
        for (lane, out) in lanes.iter_mut().enumerate() {
            let mut hasher = FxHasher::default();
            hasher.write_u64(lane as u64 + 1);
            hasher.write(tlut.bytes());
            *out = hasher.finish();
        }
        Self(lanes)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in self.0 {
            write!(f, "{lane:016x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlut::TLUT_BANK_BYTES;

    #[test]
    fn zero_is_default() {
        assert_eq!(Fingerprint::default(), Fingerprint::ZERO);
    }

    #[test]
    fn gate_skips_unchanged() {
        let mut stored = Fingerprint::ZERO;
        let incoming = Fingerprint::from_lanes([1, 2, 3, 4]);

        assert!(stored.replace_if_changed(incoming));
        assert_eq!(stored, incoming);

        // Same fingerprint again: no change reported, value untouched.
        assert!(!stored.replace_if_changed(incoming));
        assert!(!stored.replace_if_changed(incoming));
        assert_eq!(stored, incoming);
    }

    #[test]
    fn gate_stores_each_distinct_value() {
        let mut stored = Fingerprint::ZERO;
        let a = Fingerprint::from_lanes([1, 0, 0, 0]);
        let b = Fingerprint::from_lanes([2, 0, 0, 0]);

        assert!(stored.replace_if_changed(a));
        assert!(stored.replace_if_changed(b));
        assert_eq!(stored, b);
        assert!(stored.replace_if_changed(a));
        assert_eq!(stored, a);
    }

    #[test]
    fn of_tlut_is_deterministic_and_content_sensitive() {
        let bank_a = vec![0x11_u8; TLUT_BANK_BYTES];
        let mut bank_b = bank_a.clone();
        bank_b[77] ^= 0x01;

        let view_a = TlutView::from_bank(&bank_a).unwrap();
        let view_b = TlutView::from_bank(&bank_b).unwrap();

        assert_eq!(Fingerprint::of_tlut(&view_a), Fingerprint::of_tlut(&view_a));
        assert_ne!(Fingerprint::of_tlut(&view_a), Fingerprint::of_tlut(&view_b));
        assert_ne!(Fingerprint::of_tlut(&view_a), Fingerprint::ZERO);
    }

    #[test]
    fn display_is_64_hex_digits() {
        let fp = Fingerprint::from_lanes([0xAB, 0, 1, u64::MAX]);
        let s = fp.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.starts_with("00000000000000ab"));
    }
}
