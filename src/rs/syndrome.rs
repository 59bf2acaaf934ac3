//! Syndrome computation (spec.md §4.7).
//!
//! For each generator root alpha^i, evaluate the full codeword (data, then parity) as
//! one polynomial. Output convention: syndromes are stored in **reverse order** —
//! index 0 holds `R(alpha^(e-1))` — because Berlekamp-Massey and Forney consume them in
//! that order.

use crate::field::GaloisField;
use crate::poly::poly_eval;
use crate::rs::generator::Generator;

/// Evaluate the whole codeword at every generator root and return the syndromes in
/// reverse order (`synds[0] == R(alpha^(e-1))`, ..., `synds[e-1] == R(alpha^0)`).
/// Early-exit is the caller's responsibility (spec.md §4.7's "if all syndromes are 0,
/// return success with no modifications" belongs to the decode orchestration, not this
/// primitive).
pub fn compute<F: GaloisField>(codeword: &[F::Elem], gen: &Generator<F>) -> Vec<F::Elem> {
    let e = gen.ecc();
    let mut synds = vec![F::zero(); e];
    for i in 0..e {
        let value = poly_eval::<F>(codeword, gen.roots[i]);
        synds[e - i - 1] = value;
    }
    synds
}

/// Pipeline variant: the caller supplies the data portion and the (possibly still
/// in-flight) parity/remainder separately, accepting the non-contiguous buffer layout
/// an encoder may have produced. Evaluates `data` at each root, then continues the same
/// Horner accumulation for the `e` bytes of `rem`.
pub fn compute_split<F: GaloisField>(data: &[F::Elem], rem: &[F::Elem], gen: &Generator<F>) -> Vec<F::Elem> {
    let e = gen.ecc();
    let mut synds = vec![F::zero(); e];
    for i in 0..e {
        let root = gen.roots[i];
        let mut r = poly_eval::<F>(data, root);
        for &c in rem {
            r = F::add(F::mul(r, root), c);
        }
        synds[e - i - 1] = r;
    }
    synds
}

/// True iff every syndrome is zero (no detected error).
pub fn all_zero<F: GaloisField>(synds: &[F::Elem]) -> bool {
    synds.iter().all(|&s| F::is_zero(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::rs::encode::encode_basic;
    use crate::rs::generator::Generator;

    type F = Gf256Default;

    #[test]
    fn valid_codeword_has_all_zero_syndromes() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        let synds = compute::<F>(&c, &gen);
        assert!(all_zero::<F>(&synds));
    }

    #[test]
    fn corrupted_codeword_has_nonzero_syndrome() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        c[5] ^= 0x01;
        let synds = compute::<F>(&c, &gen);
        assert!(!all_zero::<F>(&synds));
    }

    #[test]
    fn split_pipeline_matches_single_pass() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);
        assert_eq!(compute::<F>(&c, &gen), compute_split::<F>(&data, &parity, &gen));
    }
}
