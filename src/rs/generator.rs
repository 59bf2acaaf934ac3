//! Generator polynomial precompute (spec.md §4.5).
//!
//! `g(x) = prod_{i=0}^{e-1} (x - alpha^i)`, built by `e` factor multiplies of a size-2
//! factor `{1, -alpha^i}`. For `p=2` the sign on the root is immaterial (subtraction is
//! XOR), so the factor is simply `{1, alpha^i}`. Double-buffered: each step multiplies
//! the accumulator (read from one buffer) into the other, so no in-place aliasing
//! trouble arises from growing the polynomial by one degree per step.

use crate::field::GaloisField;
use crate::poly::poly_mul;

/// A precomputed generator descriptor: `g[0..=e]` (monic, `g[0] == 1`) and the roots
/// `alpha^0 .. alpha^(e-1)` it was built from.
pub struct Generator<F: GaloisField> {
    /// High-coefficient-first, length `e+1`, `g[0] == F::one()`.
    pub g: Vec<F::Elem>,
    /// `roots[i] = alpha^i`, for `i` in `0..e`.
    pub roots: Vec<F::Elem>,
}

impl<F: GaloisField> Generator<F> {
    pub fn build(e: usize) -> Self {
        let mut roots = Vec::with_capacity(e);
        let mut g: Vec<F::Elem> = vec![F::one()];

        for i in 0..e {
            let root = F::exp(i);
            roots.push(root);
            let neg_root = F::sub(F::zero(), root);
            let factor = [F::one(), neg_root];
            g = poly_mul::<F>(&g, &factor);
        }

        debug_assert_eq!(g.len(), e + 1);
        debug_assert_eq!(g[0], F::one());

        Generator { g, roots }
    }

    /// `g[1..]`, the tail used directly by `poly_mod_x_n` in the basic encoder
    /// (spec.md §4.6).
    pub fn tail(&self) -> &[F::Elem] {
        &self.g[1..]
    }

    pub fn ecc(&self) -> usize {
        self.g.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::binary::Gf256Default;
    use crate::field::prime::Gf257;
    use crate::poly::poly_eval;

    #[test]
    fn roots_of_generator_vanish_gf256() {
        type F = Gf256Default;
        let gen = Generator::<F>::build(8);
        assert_eq!(gen.g.len(), 9);
        assert_eq!(gen.g[0], F::one());
        for i in 0..8 {
            assert_eq!(poly_eval::<F>(&gen.g, F::exp(i)), F::zero(), "root alpha^{i}");
        }
    }

    #[test]
    fn roots_of_generator_vanish_gf257() {
        type F = Gf257;
        let gen = Generator::<F>::build(4);
        assert_eq!(gen.g.len(), 5);
        for i in 0..4 {
            assert_eq!(poly_eval::<F>(&gen.g, F::exp(i)), F::zero(), "root alpha^{i}");
        }
    }
}
