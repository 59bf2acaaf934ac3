//! Berlekamp-Massey (spec.md §4.8): derive the error locator polynomial Lambda from a
//! syndrome sequence.
//!
//! Mirrors `kchmck-p25.rs`'s `bmcf::ErrorLocator` (itself citing Hankerson, Hoffman,
//! Leonard et al.'s *Coding Theory and Cryptography*), but generalized from the fixed
//! GF(2^6) P25 field to any [`GaloisField`], and re-expressed over this crate's
//! high-coefficient-first fixed-length buffers (reusing [`poly_shift`]/[`poly_scale`]/
//! [`poly_sub`] for the `x^m * B` update term) rather than a
//! low-coefficient-first `Polynomial<P>` wrapper.

use crate::field::GaloisField;
use crate::poly::{poly_scale, poly_shift, poly_sub};

/// Result of running Berlekamp-Massey: the locator buffer (length `e`, high-
/// coefficient-first, meaningful data in its last `degree+1` slots) and its degree.
pub struct Locator<F: GaloisField> {
    pub buf: Vec<F::Elem>,
    pub degree: usize,
}

impl<F: GaloisField> Locator<F> {
    /// The locator's coefficients, high-coefficient-first, length `degree+1`.
    pub fn coeffs(&self) -> &[F::Elem] {
        let e = self.buf.len();
        &self.buf[e - self.degree - 1..]
    }
}

/// Run Berlekamp-Massey over syndromes `s[0..e)` (spec.md's reverse-order convention:
/// `s[0] == R(alpha^(e-1))`). Returns the locator and its degree `L <= floor(e/2)`.
pub fn berlekamp_massey<F: GaloisField>(s: &[F::Elem]) -> Locator<F> {
    let e = s.len();

    let mut lambda = vec![F::zero(); e];
    *lambda.last_mut().unwrap() = F::one();
    let mut b = lambda.clone();

    let mut length = 0usize;
    let mut shift = 1usize;
    let mut last_discrepancy = F::one();

    for n in 0..e {
        let mut d = s[n];
        for i in 1..=length {
            d = F::add(d, F::mul(lambda[e - 1 - i], s[n - i]));
        }

        if F::is_zero(d) {
            shift += 1;
            continue;
        }

        let scale = F::div(d, last_discrepancy);
        let mut term = b.clone();
        poly_shift::<F>(&mut term, shift);
        poly_scale::<F>(&mut term, scale);
        let updated = poly_sub::<F>(&lambda, &term);

        if 2 * length <= n {
            let prev_lambda = std::mem::replace(&mut lambda, updated);
            b = prev_lambda;
            length = n + 1 - length;
            last_discrepancy = d;
            shift = 1;
        } else {
            lambda = updated;
            shift += 1;
        }
    }

    Locator { buf: lambda, degree: length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::poly::poly_eval;
    use crate::rs::encode::encode_basic;
    use crate::rs::generator::Generator;
    use crate::rs::syndrome;

    type F = Gf256Default;

    #[test]
    fn locator_degree_matches_error_count() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        c[3] ^= 0x55;
        c[17] ^= 0x22;

        let synds = syndrome::compute::<F>(&c, &gen);
        let loc = berlekamp_massey::<F>(&synds);
        assert_eq!(loc.degree, 2);
    }

    #[test]
    fn locator_roots_correspond_to_error_positions() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        let err_pos = [3usize, 17];
        c[err_pos[0]] ^= 0x55;
        c[err_pos[1]] ^= 0x22;

        let synds = syndrome::compute::<F>(&c, &gen);
        let loc = berlekamp_massey::<F>(&synds);
        let n = c.len();
        for &pos in &err_pos {
            let j = n - 1 - pos;
            let x_inv = F::exp((F::order() - 1).wrapping_sub(j) % (F::order() - 1));
            assert_eq!(poly_eval::<F>(loc.coeffs(), x_inv), F::zero(), "pos {pos}");
        }
    }
}
