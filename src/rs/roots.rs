//! Root finding (spec.md §4.9): given the locator Lambda, find the positions `j` in
//! `[0, n)` such that `Lambda(alpha^-j) == 0`. Positions returned here are in the
//! root finder's own index space; the `pos = n - 1 - j` conversion to a codeword byte
//! offset happens in `rs::mod` once Forney has consumed the raw `j` values (matching
//! `examples/original_source/cpp17/reed_solomon.hpp`'s `rs_decode::decode`, which calls
//! `forney` with the unconverted `err_pos` and only remaps to a buffer offset when
//! applying the correction).

use crate::field::{ByteField, GaloisField};
use crate::poly::poly_eval;

/// Brute-force: evaluate Lambda at `alpha^-i` for every `i` in `0..n`.
pub fn basic<F: GaloisField>(lambda: &[F::Elem], n: usize) -> Vec<usize> {
    let mut out = Vec::new();
    for i in 0..n {
        let x_inv = F::inv(F::exp(i));
        if F::is_zero(poly_eval::<F>(lambda, x_inv)) {
            out.push(i);
        }
    }
    out
}

/// Chien search, specialized to GF(2^8) (alpha has order 255). Reverses Lambda into
/// low-coefficient-first `coefs`, then scans `i` from `254` down to `0`: each step
/// multiplies `coefs[j]` by `alpha^j` (advancing the implicit evaluation point by one
/// power of alpha) and sums the result; a zero sum means `i` is a root. Stops once
/// `degree` roots are found, since a degree-`L` locator has at most `L` roots.
pub fn chien<F: ByteField>(lambda: &[F::Elem], degree: usize) -> Vec<usize> {
    let mut coefs: Vec<F::Elem> = lambda.iter().rev().copied().collect();
    let mut out = Vec::new();

    for i in (0..=254i32).rev() {
        let mut sum = F::one();
        for (j, c) in coefs.iter_mut().enumerate().skip(1) {
            *c = F::mul(*c, F::exp(j));
            sum = F::add(sum, *c);
        }
        if F::is_zero(sum) {
            out.push(i as usize);
            if out.len() >= degree {
                break;
            }
        }
    }

    out
}

/// Wide-LUT: evaluate Lambda at `w` packed `alpha^-i` values per step and scan each
/// lane of the result for zero.
pub fn wide_lut<F: ByteField, W: crate::field::wide::WideWord>(lambda: &[F::Elem], n: usize, poly_low: u8) -> Vec<usize> {
    let lanes = W::LANES;
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < n {
        let count = lanes.min(n - i);
        let mut xs = vec![0u8; lanes];
        for lane in 0..count {
            xs[lane] = F::to_index(F::inv(F::exp(i + lane))) as u8;
        }
        let x_word = W::from_lanes(&xs);
        let lambda_bytes: Vec<u8> = lambda.iter().map(|&c| F::to_index(c) as u8).collect();
        let r_word = crate::field::wide::eval_packed(&lambda_bytes, x_word, poly_low);
        let mut out_bytes = vec![0u8; lanes];
        r_word.to_lanes(&mut out_bytes);
        for lane in 0..count {
            if out_bytes[lane] == 0 {
                out.push(i + lane);
            }
        }
        i += count;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::rs::bm::berlekamp_massey;
    use crate::rs::encode::encode_basic;
    use crate::rs::generator::Generator;
    use crate::rs::syndrome;

    type F = Gf256Default;

    #[test]
    fn basic_and_chien_agree() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        c[3] ^= 0x55;
        c[17] ^= 0x22;

        let synds = syndrome::compute::<F>(&c, &gen);
        let loc = berlekamp_massey::<F>(&synds);

        let mut via_basic = basic::<F>(loc.coeffs(), c.len());
        let mut via_chien = chien::<F>(loc.coeffs(), loc.degree);
        via_basic.sort_unstable();
        via_chien.sort_unstable();
        assert_eq!(via_basic, via_chien);
        assert_eq!(via_basic.len(), loc.degree);
    }

    #[test]
    fn wide_lut_agrees_with_basic() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        c[3] ^= 0x55;
        c[17] ^= 0x22;

        let synds = syndrome::compute::<F>(&c, &gen);
        let loc = berlekamp_massey::<F>(&synds);

        let mut via_basic = basic::<F>(loc.coeffs(), c.len());
        let mut via_wide = wide_lut::<F, u32>(loc.coeffs(), c.len(), 0x1D);
        via_basic.sort_unstable();
        via_wide.sort_unstable();
        assert_eq!(via_basic, via_wide);
    }
}
