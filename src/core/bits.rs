//! Bit spreading and compaction for a 2D Morton (Z-order) code.
//!
//! See <https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN>.

/// Spreads the bits of `v` so bit `i` lands on bit `2 * i` of the result.
///
/// Only the low 26 bits of `v` are expected to be set. Higher bits are not
/// rejected but will collide once two spread values are interleaved.
pub fn spread_u32_to_u64(v: u32) -> u64 {
    let mut result = v as u64;
    result = (result | (result << 16)) & 0x0000FFFF0000FFFF;
    result = (result | (result << 8)) & 0x00FF00FF00FF00FF;
    result = (result | (result << 4)) & 0x0F0F0F0F0F0F0F0F;
    result = (result | (result << 2)) & 0x3333333333333333;
    (result | (result << 1)) & 0x5555555555555555
}

/// Inverse of [`spread_u32_to_u64`]: gathers the even bits of `v` into a `u32`.
///
/// Odd bits are discarded.
pub fn compact_u64_to_u32(v: u64) -> u32 {
    let mut result = v & 0x5555555555555555;
    result = (result | (result >> 1)) & 0x3333333333333333;
    result = (result | (result >> 2)) & 0x0F0F0F0F0F0F0F0F;
    result = (result | (result >> 4)) & 0x00FF00FF00FF00FF;
    result = (result | (result >> 8)) & 0x0000FFFF0000FFFF;
    ((result | (result >> 16)) & 0x00000000FFFFFFFF) as u32
}

/// Interleaves two grid indices into a score.
///
/// Latitude bits take the even positions, longitude bits the odd positions.
pub fn interleave(lat_index: u32, lon_index: u32) -> u64 {
    spread_u32_to_u64(lat_index) | (spread_u32_to_u64(lon_index) << 1)
}

/// Splits a score back into `(lat_index, lon_index)`.
pub fn deinterleave(score: u64) -> (u32, u32) {
    let lat_index = compact_u64_to_u32(score);
    let lon_index = compact_u64_to_u32(score >> 1);
    (lat_index, lon_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{MAX_GRID_INDEX, MAX_SCORE};

    #[test]
    fn test_spread_small_values() {
        assert_eq!(spread_u32_to_u64(0), 0);
        assert_eq!(spread_u32_to_u64(1), 0b1);
        assert_eq!(spread_u32_to_u64(0b11), 0b101);
        assert_eq!(spread_u32_to_u64(0b1011), 0b1000101);
    }

    #[test]
    fn test_spread_leaves_odd_bits_clear() {
        let spread = spread_u32_to_u64(MAX_GRID_INDEX);
        assert_eq!(spread & 0xAAAAAAAAAAAAAAAA, 0);
        assert_eq!(spread.count_ones(), 26);
    }

    #[test]
    fn test_spread_full_u32_uses_top_bits() {
        // No sign extension: bit 31 ends up at bit 62.
        assert_eq!(spread_u32_to_u64(u32::MAX), 0x5555555555555555);
        assert_eq!(spread_u32_to_u64(1 << 31), 1 << 62);
    }

    #[test]
    fn test_compact_ignores_odd_bits() {
        assert_eq!(compact_u64_to_u32(0xAAAAAAAAAAAAAAAA), 0);
        assert_eq!(compact_u64_to_u32(0xFFFFFFFFFFFFFFFF), u32::MAX);
        assert_eq!(compact_u64_to_u32(0b1000111), 0b1011);
    }

    #[test]
    fn test_compact_inverts_spread() {
        for v in [0, 1, 2, 3, 0x155_5555, 0x2AA_AAAA, MAX_GRID_INDEX, 12_345_678] {
            assert_eq!(compact_u64_to_u32(spread_u32_to_u64(v)), v);
        }
    }

    #[test]
    fn test_interleave_bit_positions() {
        assert_eq!(interleave(1, 0), 0b01);
        assert_eq!(interleave(0, 1), 0b10);
        assert_eq!(interleave(0b11, 0b01), 0b0111);
    }

    #[test]
    fn test_interleave_max_is_max_score() {
        assert_eq!(interleave(MAX_GRID_INDEX, MAX_GRID_INDEX), MAX_SCORE);
        assert_eq!(interleave(0, 0), 0);
    }

    #[test]
    fn test_deinterleave_inverts_interleave() {
        let samples = [
            0,
            1,
            7,
            1 << 13,
            0x155_5555,
            0x2AA_AAAA,
            33_554_431,
            48_000_123,
            MAX_GRID_INDEX,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(deinterleave(interleave(a, b)), (a, b));
            }
        }
    }

    #[test]
    fn test_deinterleave_stride_sweep() {
        let mut a: u32 = 0;
        while a <= MAX_GRID_INDEX {
            let b = MAX_GRID_INDEX - a;
            assert_eq!(deinterleave(interleave(a, b)), (a, b));
            a += 65_537;
        }
    }
}
