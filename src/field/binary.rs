//! Binary extension fields GF(2^m) (spec.md §4.1, "p=2" case).
//!
//! Two concrete shapes are provided: [`Gf256`], the byte-oriented field spec.md treats
//! as the primary target (element = `u8`, required for the wide-word lane packing in
//! [`super::wide`] and the byte-indexed LUT encoders in `rs::encode`), and
//! [`BinaryExt`], a wider binary field used internally by the BCH(63,k) codec for its
//! GF(2^6) arithmetic (spec.md §4.11). Both share the schoolbook-multiply kernel
//! spec.md §4.1 describes: scan the bits of `a` from the MSB, doubling the running
//! result and folding in the reduction polynomial whenever the top bit would overflow,
//! adding `b` when the scanned bit of `a` is set.
//!
//! The reduction polynomial constant is given in its conventional written form — e.g.
//! `0x11D` for x^8+x^4+x^3+x^2+1, `0x43` for x^6+x+1 — including the implicit leading
//! term at bit `2^m`. Only the low `m` bits are ever folded into the running remainder
//! (the leading bit cancels against the overflow it triggers), so the value actually
//! used in the XOR step always satisfies spec.md §3's "bit 2^m must be clear" invariant
//! by construction.

use std::sync::OnceLock;

use super::tables::ExpLog;
use super::GaloisField;
use crate::error::{ConfigError, ConfigResult};

const fn low_bits(poly: u32, m: u32) -> u32 {
    poly & ((1u32 << m) - 1)
}

fn schoolbook_mul_bits(a: u32, b: u32, poly_low: u32, m: u32, top_bit: u32) -> u32 {
    let mut r = 0u32;
    for i in (0..m).rev() {
        r = if r & top_bit != 0 { (r << 1) ^ poly_low } else { r << 1 };
        r &= top_bit | (top_bit - 1);
        if (a >> i) & 1 != 0 {
            r ^= b;
        }
    }
    r
}

/// Validate that `primitive` generates the full multiplicative group and return its
/// exp/log tables, or a [`ConfigError::NotPrimitive`] if it does not.
fn build_checked(order: usize, primitive: usize, poly_low: u32, m: u32) -> ConfigResult<ExpLog> {
    let top_bit = 1u32 << (m - 1);
    let tables = ExpLog::build(order, primitive, |a, b| {
        schoolbook_mul_bits(a as u32, b as u32, poly_low, m, top_bit) as usize
    });

    let generated = tables.generated_count();
    if generated != order - 1 {
        return Err(ConfigError::NotPrimitive { primitive: primitive as u32, order: generated, expected: order - 1 });
    }

    Ok(tables)
}

/// GF(2^8), byte-oriented. `POLY` is the reduction polynomial in conventional written
/// form (e.g. `0x11D`); `PRIMITIVE` is the element used to generate the exp/log tables
/// (conventionally `2`, i.e. the indeterminate `x`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Gf256<const POLY: u16, const PRIMITIVE: u8>;

/// The field spec.md's worked examples use throughout: GF(2^8), reduction 0x11D,
/// primitive element 2.
pub type Gf256Default = Gf256<0x11D, 2>;

impl<const POLY: u16, const PRIMITIVE: u8> Gf256<POLY, PRIMITIVE> {
    fn tables() -> &'static ExpLog {
        static TABLES: OnceLock<ExpLog> = OnceLock::new();
        TABLES.get_or_init(|| {
            build_checked(256, PRIMITIVE as usize, low_bits(POLY as u32, 8), 8)
                .expect("misconfigured Gf256: primitive element does not generate the field")
        })
    }

    /// Validate the type parameters explicitly, returning an error instead of panicking.
    /// Useful at a call site that wants to surface misconfiguration as a `Result`
    /// rather than relying on the lazily-panicking table build.
    pub fn validate() -> ConfigResult<()> {
        build_checked(256, PRIMITIVE as usize, low_bits(POLY as u32, 8), 8).map(|_| ())
    }
}

impl<const POLY: u16, const PRIMITIVE: u8> GaloisField for Gf256<POLY, PRIMITIVE> {
    type Elem = u8;

    const CHARACTERISTIC: u32 = 2;

    fn order() -> usize {
        256
    }

    fn zero() -> u8 {
        0
    }

    fn one() -> u8 {
        1
    }

    fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = Self::tables();
        let r = t.log[a as usize] + t.log[b as usize];
        let r = if r >= t.order - 1 { r - (t.order - 1) } else { r };
        t.exp[r] as u8
    }

    fn div(a: u8, b: u8) -> u8 {
        debug_assert_ne!(b, 0, "division by zero");
        if a == 0 {
            return 0;
        }
        let t = Self::tables();
        let r = t.log[a as usize] + (t.order - 1) - t.log[b as usize];
        let r = if r >= t.order - 1 { r - (t.order - 1) } else { r };
        t.exp[r] as u8
    }

    fn inv(a: u8) -> u8 {
        debug_assert_ne!(a, 0, "inverse of zero");
        let t = Self::tables();
        t.exp[((t.order - 1) - t.log[a as usize]) % (t.order - 1)] as u8
    }

    fn exp(k: usize) -> u8 {
        let t = Self::tables();
        t.exp[k % (t.order - 1)] as u8
    }

    fn log(a: u8) -> usize {
        debug_assert_ne!(a, 0, "log of zero");
        Self::tables().log[a as usize]
    }

    fn to_index(a: u8) -> usize {
        a as usize
    }

    fn from_index(i: usize) -> u8 {
        i as u8
    }
}

/// A wider binary extension field GF(2^m), `m <= 16`. Used internally by the BCH(63,k)
/// codec (spec.md §4.11) for its GF(2^6) decode arithmetic; general enough to cover any
/// binary field this crate might need beyond the byte-oriented [`Gf256`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BinaryExt<const M: u32, const POLY: u32, const PRIMITIVE: u32>;

impl<const M: u32, const POLY: u32, const PRIMITIVE: u32> BinaryExt<M, POLY, PRIMITIVE> {
    /// Validate the type parameters explicitly, returning an error instead of panicking.
    pub fn validate() -> ConfigResult<()> {
        build_checked(1usize << M, PRIMITIVE as usize, low_bits(POLY, M), M).map(|_| ())
    }

    fn tables() -> &'static ExpLog {
        static TABLES: OnceLock<ExpLog> = OnceLock::new();
        TABLES.get_or_init(|| {
            build_checked(1usize << M, PRIMITIVE as usize, low_bits(POLY, M), M)
                .expect("misconfigured BinaryExt: primitive element does not generate the field")
        })
    }
}

impl<const M: u32, const POLY: u32, const PRIMITIVE: u32> GaloisField for BinaryExt<M, POLY, PRIMITIVE> {
    type Elem = u16;

    const CHARACTERISTIC: u32 = 2;

    fn order() -> usize {
        1usize << M
    }

    fn zero() -> u16 {
        0
    }

    fn one() -> u16 {
        1
    }

    fn add(a: u16, b: u16) -> u16 {
        a ^ b
    }

    fn sub(a: u16, b: u16) -> u16 {
        a ^ b
    }

    fn mul(a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = Self::tables();
        let r = t.log[a as usize] + t.log[b as usize];
        let r = if r >= t.order - 1 { r - (t.order - 1) } else { r };
        t.exp[r] as u16
    }

    fn div(a: u16, b: u16) -> u16 {
        debug_assert_ne!(b, 0, "division by zero");
        if a == 0 {
            return 0;
        }
        let t = Self::tables();
        let r = t.log[a as usize] + (t.order - 1) - t.log[b as usize];
        let r = if r >= t.order - 1 { r - (t.order - 1) } else { r };
        t.exp[r] as u16
    }

    fn inv(a: u16) -> u16 {
        debug_assert_ne!(a, 0, "inverse of zero");
        let t = Self::tables();
        t.exp[((t.order - 1) - t.log[a as usize]) % (t.order - 1)] as u16
    }

    fn exp(k: usize) -> u16 {
        let t = Self::tables();
        t.exp[k % (t.order - 1)] as u16
    }

    fn log(a: u16) -> usize {
        debug_assert_ne!(a, 0, "log of zero");
        Self::tables().log[a as usize]
    }

    fn to_index(a: u16) -> usize {
        a as usize
    }

    fn from_index(i: usize) -> u16 {
        i as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = Gf256Default;

    #[test]
    fn multiplicative_group() {
        for a in 1u32..256 {
            let a = a as u8;
            assert_eq!(F::mul(a, F::inv(a)), 1, "a={a:#x}");
            assert_eq!(F::exp(F::log(a)), a);
        }
    }

    #[test]
    fn closure() {
        for a in 0u32..256 {
            for b in 0u32..256 {
                let (a, b) = (a as u8, b as u8);
                let _ = F::add(a, b);
                let _ = F::sub(a, b);
                let _ = F::mul(a, b);
                if b != 0 {
                    let _ = F::div(a, b);
                }
            }
        }
    }

    #[test]
    fn schoolbook_matches_reference_values() {
        // 0x53 * 0xCA = 0x01 is the textbook AES-field example (reduction 0x11B), not
        // applicable to 0x11D directly, so instead check self-consistency: a*1 == a and
        // a*0 == 0 for a sample of elements.
        for a in [0x01u8, 0x02, 0x53, 0xff] {
            assert_eq!(F::mul(a, 1), a);
            assert_eq!(F::mul(a, 0), 0);
        }
    }

    #[test]
    fn bch_field_cycles() {
        type G = BinaryExt<6, 0x43, 2>;
        for a in 1u32..63 {
            let a = a as u16;
            assert_eq!(G::mul(a, G::inv(a)), 1);
        }
        assert_eq!(G::exp(63), G::exp(0));
    }

    #[test]
    fn validate_accepts_a_real_primitive_element() {
        assert!(Gf256Default::validate().is_ok());
        assert!(BinaryExt::<6, 0x43, 2>::validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_non_primitive_element() {
        // 1 is the multiplicative identity in any field: it generates only the
        // one-element cycle {1}, never the full group, for any field this crate builds.
        let err = BinaryExt::<6, 0x43, 1>::validate().expect_err("1 never generates the full group");
        assert!(matches!(err, ConfigError::NotPrimitive { primitive: 1, order: 1, .. }));
    }
}
