//! Prime fields GF(p) (spec.md §4.1, "odd p" case).
//!
//! Addition and subtraction are mod-p integer arithmetic; multiplication still goes
//! through an exp/log table built from a primitive root, exactly as for the binary
//! fields, so the rest of the crate (generator precompute, syndromes, Berlekamp-Massey,
//! root finding, Forney) never needs to know whether it is working over GF(2^m) or
//! GF(p). The one place prime fields diverge from binary ones structurally is parity:
//! spec.md §4.6 calls out that odd-prime encoders must negate the remainder rather than
//! XOR it in, since subtraction is no longer its own inverse.

use std::sync::OnceLock;

use super::tables::ExpLog;
use super::GaloisField;
use crate::error::{ConfigError, ConfigResult};

fn build_checked(p: usize, primitive: usize) -> ConfigResult<ExpLog> {
    let tables = ExpLog::build(p, primitive, |a, b| (a * b) % p);

    let generated = tables.generated_count();
    if generated != p - 1 {
        return Err(ConfigError::NotPrimitive { primitive: primitive as u32, order: generated, expected: p - 1 });
    }

    Ok(tables)
}

/// GF(p) for an odd prime `P`, with primitive root `PRIMITIVE`. Element values are
/// taken directly as their residue `0..P`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Prime<const P: u16, const PRIMITIVE: u16>;

/// The field spec.md's odd-prime worked example uses: GF(257), primitive root 3.
pub type Gf257 = Prime<257, 3>;

impl<const P: u16, const PRIMITIVE: u16> Prime<P, PRIMITIVE> {
    fn tables() -> &'static ExpLog {
        static TABLES: OnceLock<ExpLog> = OnceLock::new();
        TABLES.get_or_init(|| {
            build_checked(P as usize, PRIMITIVE as usize)
                .expect("misconfigured Prime: primitive root does not generate the field")
        })
    }

    pub fn validate() -> ConfigResult<()> {
        build_checked(P as usize, PRIMITIVE as usize).map(|_| ())
    }
}

impl<const P: u16, const PRIMITIVE: u16> GaloisField for Prime<P, PRIMITIVE> {
    type Elem = u16;

    const CHARACTERISTIC: u32 = P as u32;

    fn order() -> usize {
        P as usize
    }

    fn zero() -> u16 {
        0
    }

    fn one() -> u16 {
        1
    }

    fn add(a: u16, b: u16) -> u16 {
        let s = a as u32 + b as u32;
        (s % P as u32) as u16
    }

    fn sub(a: u16, b: u16) -> u16 {
        let s = a as i32 - b as i32 + P as i32;
        (s % P as i32) as u16
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

    type F = Gf257;

    #[test]
    fn multiplicative_group() {
        for a in 1u32..257 {
            let a = a as u16;
            assert_eq!(F::mul(a, F::inv(a)), 1, "a={a}");
        }
    }

    #[test]
    fn add_sub_are_inverses() {
        for a in 0u32..257 {
            for b in 0u32..257 {
                let (a, b) = (a as u16, b as u16);
                assert_eq!(F::sub(F::add(a, b), b), a);
            }
        }
    }

    #[test]
    fn sub_is_not_its_own_inverse() {
        // Unlike the binary fields, p=257 subtraction is not XOR: a - b != a + b unless
        // b is its own additive inverse (b == 0, since 257 is odd and has no element of
        // order 2 under addition other than 0).
        assert_ne!(F::sub(5, 3), F::add(5, 3));
    }

    #[test]
    fn validate_accepts_a_real_primitive_root() {
        assert!(F::validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_non_primitive_root() {
        // 1 generates only the one-element cycle {1} in any field.
        let err = Prime::<257, 1>::validate().expect_err("1 never generates the full group");
        assert!(matches!(err, ConfigError::NotPrimitive { primitive: 1, order: 1, .. }));
    }
}
