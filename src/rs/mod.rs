//! Reed-Solomon codec (spec.md §6 "External interfaces", core pipeline from §4.5-§4.10).
//!
//! [`ReedSolomon<F>`] wires together generator precompute, encode, syndrome, Berlekamp-
//! Massey, root finding, and Forney into the two operations spec.md names: `encode` and
//! `decode`/`decode_with_erasures`. It always encodes via the basic rotating-remainder
//! register ([`encode::encode_basic`]) and decodes via scalar syndromes, basic root
//! finding, and Forney. The byte-LUT, slice-by-N, Chien, and wide-word strategies in
//! [`encode`] and [`roots`] are exposed as standalone building blocks over the same
//! [`Generator`] rather than folded into `ReedSolomon` itself: they only typecheck for
//! byte-oriented fields ([`crate::field::ByteField`]), while `ReedSolomon` stays generic
//! over any [`GaloisField`] (including GF(257)), so forcing them into one struct would
//! mean infecting the general case with a bound it doesn't need.

pub mod bm;
pub mod encode;
pub mod forney;
pub mod generator;
pub mod roots;
pub mod syndrome;

use crate::error::{ConfigError, ConfigResult, DecodeError, DecodeResult};
use crate::field::GaloisField;
use crate::poly::poly_mul;
use generator::Generator;

/// A configured Reed-Solomon codec over field `F` with `e` parity symbols. `e` is fixed
/// at construction; codeword length `n` (and therefore data length `k = n - e`) is
/// supplied per call, bounded only by `n <= q - 1`.
pub struct ReedSolomon<F: GaloisField> {
    gen: Generator<F>,
}

impl<F: GaloisField> ReedSolomon<F> {
    /// Build a codec with `ecc` parity symbols. `ecc` must be strictly less than
    /// `q - 1` so a codeword (even at maximum length) still fits within the field's
    /// nonzero elements.
    pub fn new(ecc: usize) -> ConfigResult<Self> {
        let max = F::order() - 1;
        if ecc >= max {
            return Err(ConfigError::EccTooLarge { ecc, max });
        }
        Ok(ReedSolomon { gen: Generator::build(ecc) })
    }

    pub fn ecc(&self) -> usize {
        self.gen.ecc()
    }

    /// Reads `codeword[..k]` (`k = codeword.len() - ecc`) as the message and overwrites
    /// `codeword[k..]` with the computed parity. Idempotent: re-encoding a codeword
    /// whose parity already matches reproduces the same bytes (spec.md §8 property 8).
    pub fn encode(&self, codeword: &mut [F::Elem]) {
        let e = self.ecc();
        debug_assert!(codeword.len() > e, "codeword must hold at least one data byte beyond its {e} parity bytes");
        let k = codeword.len() - e;
        let parity = encode::encode_basic::<F>(&codeword[..k], &self.gen);
        codeword[k..].copy_from_slice(&parity);
    }

    /// In-place decode. Returns `Ok(())` with a corrected (or already-valid) codeword,
    /// or a [`DecodeError`] if the buffer is uncorrectable — in which case the buffer
    /// contents are unspecified but remain within bounds (spec.md §7).
    pub fn decode(&self, codeword: &mut [F::Elem]) -> DecodeResult<()> {
        let n = codeword.len();
        let synds = syndrome::compute::<F>(codeword, &self.gen);
        if syndrome::all_zero::<F>(&synds) {
            return Ok(());
        }

        let loc = bm::berlekamp_massey::<F>(&synds);
        let positions = roots::basic::<F>(loc.coeffs(), n);
        if positions.len() != loc.degree {
            return Err(DecodeError::Uncorrectable);
        }

        let mags = forney::magnitudes::<F>(&synds, loc.coeffs(), &positions);
        apply_corrections::<F>(codeword, &positions, &mags)
    }

    /// Decode with known erasure positions (codeword byte offsets), bypassing root
    /// finding. Correctable up to `ecc` erasures.
    pub fn decode_with_erasures(&self, codeword: &mut [F::Elem], positions: &[usize]) -> DecodeResult<()> {
        let n = codeword.len();
        let e = self.ecc();
        if positions.len() > e {
            return Err(DecodeError::TooManyErasures { supplied: positions.len(), max: e });
        }
        for &pos in positions {
            if pos >= n {
                return Err(DecodeError::InvalidErasurePosition { pos, n });
            }
        }

        let synds = syndrome::compute::<F>(codeword, &self.gen);
        if syndrome::all_zero::<F>(&synds) {
            return Ok(());
        }

        let js: Vec<usize> = positions.iter().map(|&pos| n - 1 - pos).collect();
        let mut lambda = vec![F::one()];
        for &j in &js {
            let neg_root = F::sub(F::zero(), F::exp(j));
            lambda = poly_mul::<F>(&lambda, &[neg_root, F::one()]);
        }

        let mags = forney::magnitudes::<F>(&synds, &lambda, &js);
        apply_corrections::<F>(codeword, &js, &mags)
    }
}

fn apply_corrections<F: GaloisField>(codeword: &mut [F::Elem], js: &[usize], mags: &[F::Elem]) -> DecodeResult<()> {
    let n = codeword.len();
    for (&j, &mag) in js.iter().zip(mags) {
        if j >= n {
            return Err(DecodeError::PositionOutOfBounds { pos: j, n });
        }
        let pos = n - 1 - j;
        codeword[pos] = F::add(codeword[pos], mag);
    }
    Ok(())
}
