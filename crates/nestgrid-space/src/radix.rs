//! Mixed-radix addressing between integer coordinate vectors and flat indices.
//!
//! Axis 0 is the fastest-varying digit: `stride[0] = 1` and
//! `stride[i] = stride[i - 1] * extent[i - 1]`. Both grid backends share
//! this scheme; the BCC lattice applies it to `index >> 1`.

use crate::error::GridError;

/// Per-axis extents with their prefix-product strides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedRadix<const N: usize> {
    extents: [u64; N],
    strides: [u64; N],
    len: u64,
}

impl<const N: usize> MixedRadix<N> {
    /// Build the addressing scheme for the box `[0, extents[0]) × … × [0, extents[N-1])`.
    ///
    /// Returns `Err(GridError::EmptyExtent)` if any extent is zero, or
    /// `Err(GridError::SizeOverflow)` if the product of extents overflows `u64`.
    pub fn new(extents: [u64; N]) -> Result<Self, GridError> {
        let mut strides = [0u64; N];
        let mut len: u64 = 1;
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::EmptyExtent { axis });
            }
            strides[axis] = len;
            len = len
                .checked_mul(extent)
                .ok_or_else(|| GridError::SizeOverflow {
                    extents: extents.to_vec(),
                })?;
        }
        Ok(Self {
            extents,
            strides,
            len,
        })
    }

    /// Number of addressable coordinate vectors (product of extents).
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always returns `false`: construction rejects zero extents.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Per-axis extents.
    pub fn extents(&self) -> &[u64; N] {
        &self.extents
    }

    /// Prefix-product strides.
    pub fn strides(&self) -> &[u64; N] {
        &self.strides
    }

    /// Flatten a coordinate vector: `sum_i stride[i] * coords[i]`.
    ///
    /// Arithmetic wraps, so out-of-range coordinates alias to some index
    /// deterministically instead of panicking.
    pub fn encode(&self, coords: &[u64; N]) -> u64 {
        coords
            .iter()
            .zip(&self.strides)
            .fold(0u64, |acc, (&c, &s)| acc.wrapping_add(c.wrapping_mul(s)))
    }

    /// Flatten a signed coordinate vector with two's-complement wraparound.
    ///
    /// Negative coordinates reinterpret as large unsigned digits, matching
    /// [`encode`](Self::encode) on the bit pattern.
    pub fn encode_wrapping(&self, coords: &[i64; N]) -> u64 {
        coords
            .iter()
            .zip(&self.strides)
            .fold(0u64, |acc, (&c, &s)| {
                acc.wrapping_add((c as u64).wrapping_mul(s))
            })
    }

    /// Expand a flat index: `coords[i] = (index / stride[i]) % extent[i]`.
    ///
    /// No bounds check beyond the per-axis modulo; indices at or past
    /// [`len`](Self::len) wrap on the last axis.
    pub fn decode(&self, index: u64) -> [u64; N] {
        std::array::from_fn(|i| (index / self.strides[i]) % self.extents[i])
    }

    /// Expand a flat index into signed coordinates for offset arithmetic.
    pub(crate) fn decode_signed(&self, index: u64) -> [i64; N] {
        // Each digit is below its extent, and extents fit the index space.
        self.decode(index).map(|c| c as i64)
    }

    /// `true` if `0 <= coords[i] < extent[i]` on every axis.
    pub fn contains(&self, coords: &[i64; N]) -> bool {
        coords
            .iter()
            .zip(&self.extents)
            .all(|(&c, &e)| c >= 0 && (c as u64) < e)
    }

    /// Like [`contains`](Self::contains), reporting the first bad axis.
    pub(crate) fn check_coords(&self, coords: &[i64; N]) -> Result<(), GridError> {
        for (axis, (&coord, &extent)) in coords.iter().zip(&self.extents).enumerate() {
            if coord < 0 || coord as u64 >= extent {
                return Err(GridError::NearestCellOutOfRange {
                    axis,
                    coord,
                    extent,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strides_are_prefix_products() {
        let r = MixedRadix::new([3, 4, 5]).unwrap();
        assert_eq!(r.strides(), &[1, 3, 12]);
        assert_eq!(r.len(), 60);
    }

    #[test]
    fn zero_extent_rejected() {
        assert_eq!(
            MixedRadix::new([3, 0, 5]),
            Err(GridError::EmptyExtent { axis: 1 })
        );
    }

    #[test]
    fn overflowing_product_rejected() {
        let big = 1u64 << 32;
        assert!(matches!(
            MixedRadix::new([big, big, 2]),
            Err(GridError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn axis_zero_varies_fastest() {
        let r = MixedRadix::new([2, 3, 4]).unwrap();
        assert_eq!(r.decode(0), [0, 0, 0]);
        assert_eq!(r.decode(1), [1, 0, 0]);
        assert_eq!(r.decode(2), [0, 1, 0]);
        assert_eq!(r.decode(6), [0, 0, 1]);
        assert_eq!(r.encode(&[1, 2, 3]), 1 + 2 * 2 + 3 * 6);
    }

    #[test]
    fn decode_wraps_past_len() {
        let r = MixedRadix::new([2, 2, 2]).unwrap();
        assert_eq!(r.decode(8), r.decode(0));
        assert_eq!(r.decode(13), r.decode(5));
    }

    #[test]
    fn negative_digits_alias_deterministically() {
        let r = MixedRadix::new([4, 4, 4]).unwrap();
        let a = r.encode_wrapping(&[-1, 0, 0]);
        let b = r.encode_wrapping(&[-1, 0, 0]);
        assert_eq!(a, b);
        assert_eq!(a, u64::MAX);
        // Wrapping addition cancels across digits.
        assert_eq!(r.encode_wrapping(&[-4, 1, 0]), 0);
    }

    #[test]
    fn contains_checks_every_axis() {
        let r = MixedRadix::new([2, 3, 4]).unwrap();
        assert!(r.contains(&[1, 2, 3]));
        assert!(!r.contains(&[2, 0, 0]));
        assert!(!r.contains(&[0, -1, 0]));
        assert!(!r.contains(&[0, 0, 4]));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(
            ex in 1u64..9, ey in 1u64..9, ez in 1u64..9, ew in 1u64..9,
            seed in any::<u64>(),
        ) {
            let r = MixedRadix::new([ex, ey, ez, ew]).unwrap();
            let index = seed % r.len();
            let coords = r.decode(index);
            for (c, e) in coords.iter().zip(r.extents()) {
                prop_assert!(c < e);
            }
            prop_assert_eq!(r.encode(&coords), index);
            prop_assert_eq!(r.encode_wrapping(&r.decode_signed(index)), index);
        }
    }
}
