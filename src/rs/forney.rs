//! Forney's algorithm (spec.md §4.10): turn a syndrome sequence, a locator, and a set
//! of error positions into error magnitudes.
//!
//! Ported from `rs_decode::forney` in
//! `examples/original_source/cpp17/reed_solomon.hpp`. Error positions here are the
//! root finder's raw index space (`j`, not yet converted to a codeword byte offset) —
//! `Xi = alpha^j`, matching the original's `RS::GF::exp(err_pos[i])` called before any
//! `pos = n - 1 - j` remapping.

use crate::field::GaloisField;
use crate::poly::{ex_synth_div, poly_deriv, poly_eval, poly_mul};

/// Compute one error magnitude per entry of `positions` (root-finder index space).
/// `synds` is the reverse-order syndrome sequence, `lambda` the locator's coefficients
/// (high-coefficient-first, length `degree+1`).
pub fn magnitudes<F: GaloisField>(synds: &[F::Elem], lambda: &[F::Elem], positions: &[usize]) -> Vec<F::Elem> {
    let e = synds.len();

    // Omega(x) = S(x)*Lambda(x) mod x^e.
    let mut omega = poly_mul::<F>(synds, lambda);
    let mut x_pow_e = vec![F::zero(); e + 1];
    x_pow_e[0] = F::one();
    let quot_len = ex_synth_div::<F>(&mut omega, &x_pow_e);
    let mut begin = quot_len;
    while begin < omega.len() - 1 && F::is_zero(omega[begin]) {
        begin += 1;
    }
    let omega_rem = &omega[begin..];

    let lambda_deriv = poly_deriv::<F>(lambda);

    positions
        .iter()
        .map(|&j| {
            let xi = F::exp(j);
            let xi_inv = F::inv(xi);
            let n = poly_eval::<F>(omega_rem, xi_inv);
            let d = poly_eval::<F>(&lambda_deriv, xi_inv);
            F::mul(xi, F::div(n, d))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::rs::bm::berlekamp_massey;
    use crate::rs::encode::encode_basic;
    use crate::rs::generator::Generator;
    use crate::rs::roots;
    use crate::rs::syndrome;

    type F = Gf256Default;

    #[test]
    fn magnitudes_recover_injected_errors() {
        let gen = Generator::<F>::build(8);
        let data: Vec<u8> = (0..32).collect();
        let parity = encode_basic::<F>(&data, &gen);
        let mut c = data.clone();
        c.extend_from_slice(&parity);

        let n = c.len();
        let err_positions_in_codeword = [3usize, 17];
        let err_values = [0x55u8, 0x22u8];
        for (&pos, &v) in err_positions_in_codeword.iter().zip(&err_values) {
            c[pos] ^= v;
        }

        let synds = syndrome::compute::<F>(&c, &gen);
        let loc = berlekamp_massey::<F>(&synds);
        let js = roots::basic::<F>(loc.coeffs(), n);
        assert_eq!(js.len(), loc.degree);

        let mags = magnitudes::<F>(&synds, loc.coeffs(), &js);

        for (&j, &mag) in js.iter().zip(&mags) {
            let pos = n - 1 - j;
            let idx = err_positions_in_codeword.iter().position(|&p| p == pos);
            assert!(idx.is_some(), "unexpected root at pos {pos}");
            assert_eq!(mag, err_values[idx.unwrap()]);
        }
    }
}
