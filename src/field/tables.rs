//! Exp/log (and optional full multiplication) table construction (spec.md §4.1, §4.3).
//!
//! Table build is the same for every field: start `x = 1`; for `i` in `[0, q)`,
//! `exp[i] = x`, `log[x] = i`, `x = schoolbook_mul(x, alpha)`. The schoolbook multiply
//! passed in must not itself depend on the log table being built, otherwise the zeroth
//! entry would be circular.

/// Exp/log tables for a field of order `q`, indexed by the field's dense `0..q`
/// representation (`GaloisField::to_index`/`from_index`).
pub struct ExpLog {
    /// `exp[i] = alpha^i`, for `i` in `0..q-1`; `exp[q-1] == exp[0] == 1` (cyclic, so we
    /// only store `q-1` distinct entries but keep the table `q-1` long for `exp_k`'s
    /// `mod (q-1)` reduction to index directly).
    pub exp: Vec<usize>,
    /// `log[to_index(a)] = i` such that `exp[i] == a`, for `a != 0`. `log[0]` is never
    /// read; it is left as `usize::MAX` as a tripwire.
    pub log: Vec<usize>,
    pub order: usize,
}

impl ExpLog {
    /// Build the tables for a field of order `q` with primitive element `primitive`
    /// (given as its dense index), using `schoolbook_mul` for the doubling step.
    pub fn build(order: usize, primitive: usize, schoolbook_mul: impl Fn(usize, usize) -> usize) -> Self {
        let mut exp = vec![0usize; order - 1];
        let mut log = vec![usize::MAX; order];

        let mut x = 1usize;
        for i in 0..order - 1 {
            exp[i] = x;
            log[x] = i;
            x = schoolbook_mul(x, primitive);
        }

        debug_assert_eq!(x, 1, "primitive element did not cycle back to 1 after q-1 steps");

        ExpLog { exp, log, order }
    }

    /// Number of distinct nonzero elements the primitive element actually generated,
    /// for the `NotPrimitive` construction-time check in [`crate::field::binary`] and
    /// [`crate::field::prime`].
    pub fn generated_count(&self) -> usize {
        self.log.iter().filter(|&&l| l != usize::MAX).count()
    }
}

/// Full `q x q` multiplication table, worthwhile only while `q <= 4096` per spec.md
/// §4.3. Not used by the byte fields in this crate (the log/exp path is already O(1)
/// and avoids a 64KiB/256KiB table), but provided for completeness and for the table-
/// consistency property test (spec.md §8 property 3).
pub struct MulTable {
    pub order: usize,
    table: Vec<usize>,
}

impl MulTable {
    pub fn build(order: usize, mul: impl Fn(usize, usize) -> usize) -> Self {
        assert!(order <= 4096, "full multiplication table only built for q <= 4096");

        let mut table = vec![0usize; order * order];
        for a in 0..order {
            for b in 0..order {
                table[a * order + b] = mul(a, b);
            }
        }

        MulTable { order, table }
    }

    pub fn get(&self, a: usize, b: usize) -> usize {
        self.table[a * self.order + b]
    }
}
