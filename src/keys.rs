//! Order-preserving mapping between `i32` keys and `u32` words.
//!
//! Flipping the sign bit of the two's complement pattern moves `i32::MIN` to `0` and `i32::MAX`
//! to `u32::MAX`, so unsigned comparison of the words agrees with signed comparison of the keys.

/// The most significant bit of a 32-bit word.
pub const SIGN_BIT: u32 = 1 << 31;

/// Map `key` to a word whose unsigned order matches the signed order of keys.
#[inline(always)]
pub const fn encode(key: i32) -> u32 {
    (key as u32) ^ SIGN_BIT
}

/// Invert [`encode`].
#[inline(always)]
pub const fn decode(word: u32) -> i32 {
    (word ^ SIGN_BIT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extremes_land_on_word_bounds() {
        assert_eq!(encode(i32::MIN), 0);
        assert_eq!(encode(i32::MAX), u32::MAX);
        assert_eq!(encode(0), SIGN_BIT);
        assert_eq!(encode(-1), SIGN_BIT - 1);
    }

    #[test]
    fn round_trip_at_interesting_values() {
        for key in [i32::MIN, i32::MIN + 1, -256, -1, 0, 1, 255, 256, i32::MAX - 1, i32::MAX] {
            assert_eq!(decode(encode(key)), key);
        }
    }

    proptest! {
        #[test]
        fn round_trip(key in any::<i32>()) {
            prop_assert_eq!(decode(encode(key)), key);
        }

        #[test]
        fn preserves_order(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(a.cmp(&b), encode(a).cmp(&encode(b)));
        }
    }
}
