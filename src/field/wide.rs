//! Wide-word GF(2^8) arithmetic: one machine word holds `w` independent byte lanes,
//! each an element of the same field, and a single scalar loop advances all of them at
//! once (spec.md §4.2). This is the crate's only lane-packed SIMD-in-a-register trick;
//! everything else stays scalar. Grounded on `gf_wide_mul` in
//! `examples/original_source/cpp17/galois.hpp`, translated to `bytemuck`'s safe
//! byte-array casts in place of a reinterpret_cast.
//!
//! Two bit tricks make the per-lane branches branchless and keep them from crossing
//! lane boundaries:
//! - `m = r & 0x80; m -= m >> 7` turns each lane's top bit into `0x7f` (not quite
//!   `0xff`, but the reduction polynomial's own bit 7 is guaranteed clear, so ANDing it
//!   with `0x7f` or `0xff` gives the same result). Masking `r` with `0x7f` before the
//!   shift keeps the bit that's about to be dropped from leaking into the next lane up.
//! - `n = (n << 8) - n`, with `n` holding a lone 0/1 bit per lane, broadcasts each
//!   lane's bit to `0x00`/`0xff` across every lane simultaneously: shifting left by one
//!   lane width and subtracting lets the borrow chain resolve each lane independently,
//!   the same identity spec.md's "`(n<<8) − n`" names directly.

use bytemuck::{Pod, Zeroable};

/// A machine word packing `N` GF(2^8) lanes, one element per byte, little-endian.
pub trait WideWord: Copy + Pod + Zeroable {
    const LANES: usize;

    fn from_lanes(bytes: &[u8]) -> Self;
    fn to_lanes(self, out: &mut [u8]);
    fn splat(byte: u8) -> Self;
    fn bitand(self, rhs: Self) -> Self;
    fn bitxor(self, rhs: Self) -> Self;
    fn wrapping_shr(self, bits: u32) -> Self;
    fn wrapping_shl(self, bits: u32) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn zero() -> Self;
}

macro_rules! impl_wide_word {
    ($ty:ty, $lanes:expr) => {
        impl WideWord for $ty {
            const LANES: usize = $lanes;

            fn from_lanes(bytes: &[u8]) -> Self {
                <$ty>::from_le(bytemuck::pod_read_unaligned(&bytes[..$lanes]))
            }

            fn to_lanes(self, out: &mut [u8]) {
                out[..$lanes].copy_from_slice(bytemuck::bytes_of(&self.to_le()));
            }

            fn splat(byte: u8) -> Self {
                let mut x: $ty = 0;
                for i in 0..$lanes {
                    x |= (byte as $ty) << (8 * i);
                }
                x
            }

            fn bitand(self, rhs: Self) -> Self {
                self & rhs
            }

            fn bitxor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            fn wrapping_shr(self, bits: u32) -> Self {
                <$ty>::wrapping_shr(self, bits)
            }

            fn wrapping_shl(self, bits: u32) -> Self {
                <$ty>::wrapping_shl(self, bits)
            }

            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            fn zero() -> Self {
                0
            }
        }
    };
}

impl_wide_word!(u32, 4);
impl_wide_word!(u64, 8);

/// Packed GF(2^8) multiply: `w` independent lane-wise products in one pass, all lanes
/// sharing the same reduction polynomial. `poly_low` is the field's reduction
/// polynomial masked to its low 8 bits (see [`super::binary`]); the caller is
/// responsible for ensuring its bit `0x80` is clear, the precondition that keeps every
/// shift in this loop inside its own lane.
pub fn mul_packed<W: WideWord>(a: W, b: W, poly_low: u8) -> W {
    let poly = W::splat(poly_low);
    let mut r = W::zero();
    for i in (0..8).rev() {
        let m = r.bitand(W::splat(0x80));
        let m = m.wrapping_sub(m.wrapping_shr(7));
        r = r.bitand(W::splat(0x7f)).wrapping_shl(1).bitxor(poly.bitand(m));

        let n = a.bitand(W::splat(0x01).wrapping_shl(i)).wrapping_shr(i);
        let n = n.wrapping_shl(8).wrapping_sub(n);
        r = r.bitxor(b.bitand(n));
    }
    r
}

/// Evaluate the same byte polynomial (high-coefficient-first, per spec.md §4.4) at `w`
/// distinct argument lanes simultaneously via packed Horner, one multiply-add pass per
/// coefficient.
pub fn eval_packed<W: WideWord>(poly: &[u8], x: W, poly_low: u8) -> W {
    let mut r = W::zero();
    for &c in poly {
        r = mul_packed(r, x, poly_low).bitxor(W::splat(c));
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::field::GaloisField;

    #[test]
    fn packed_mul_matches_scalar_in_every_lane() {
        let a_bytes = [0x02u8, 0x53, 0xff, 0x01];
        let b_bytes = [0x03u8, 0xca, 0x01, 0x80];

        let a_word = u32::from_lanes(&a_bytes);
        let b_word = u32::from_lanes(&b_bytes);
        let r_word = mul_packed(a_word, b_word, 0x1D);

        let mut out = [0u8; 4];
        r_word.to_lanes(&mut out);

        for lane in 0..4 {
            assert_eq!(out[lane], Gf256Default::mul(a_bytes[lane], b_bytes[lane]), "lane {lane}");
        }
    }

    #[test]
    fn packed_eval_matches_scalar_horner() {
        let poly = [0x01u8, 0x00, 0x1D, 0x02];
        let xs = [0x01u8, 0x02, 0x03, 0xff];
        let x_word = u32::from_lanes(&xs);
        let r_word = eval_packed(&poly, x_word, 0x1D);

        let mut out = [0u8; 4];
        r_word.to_lanes(&mut out);

        for (lane, &x) in xs.iter().enumerate() {
            let mut r = 0u8;
            for &c in &poly {
                r = Gf256Default::add(Gf256Default::mul(r, x), c);
            }
            assert_eq!(out[lane], r, "lane {lane}");
        }
    }

    #[test]
    fn mul_by_zero_and_one() {
        let a_word = u64::from_lanes(&[0x01, 0x02, 0x53, 0xff, 0x10, 0x20, 0x30, 0x40]);
        let zero = u64::zero();
        let one = u64::splat(0x01);
        assert_eq!(mul_packed(a_word, zero, 0x1D), zero);
        assert_eq!(mul_packed(a_word, one, 0x1D), a_word);
    }
}
