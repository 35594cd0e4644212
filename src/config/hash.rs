//! Legacy hash codes for settings change detection
//!
//! The host compares these values against the ones it computed when the
//! layout was last saved, so they must match the host runtime's own
//! `GetHashCode` for `int`, `double` and `string` bit for bit.

/// Hash contribution of a single settings value
pub trait LegacyHash {
    fn legacy_hash(&self) -> i32;
}

impl LegacyHash for i32 {
    #[inline]
    fn legacy_hash(&self) -> i32 {
        *self
    }
}

impl LegacyHash for f64 {
    /// Both zeroes hash to 0; otherwise low word XOR high word of the bits
    #[inline]
    fn legacy_hash(&self) -> i32 {
        if *self == 0.0 {
            return 0;
        }
        let bits = self.to_bits() as i64;
        (bits as i32) ^ ((bits >> 32) as i32)
    }
}

impl LegacyHash for str {
    /// 64-bit framework string hash over UTF-16 code units
    fn legacy_hash(&self) -> i32 {
        let mut hash1: i32 = 5381;
        let mut hash2: i32 = hash1;

        let units: Vec<u16> = self.encode_utf16().collect();
        for pair in units.chunks(2) {
            hash1 = (hash1 << 5).wrapping_add(hash1) ^ pair[0] as i32;
            if let Some(&c) = pair.get(1) {
                hash2 = (hash2 << 5).wrapping_add(hash2) ^ c as i32;
            }
        }

        hash1.wrapping_add(hash2.wrapping_mul(1_566_083_941))
    }
}

impl LegacyHash for String {
    #[inline]
    fn legacy_hash(&self) -> i32 {
        self.as_str().legacy_hash()
    }
}
