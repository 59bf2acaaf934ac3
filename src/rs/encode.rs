//! Encoder strategies (spec.md §4.6). All three compute the same `e`-byte parity;
//! the choice between them is a performance/space trade, never an observable one.
//!
//! `encode`'s codeword convention (spec.md §6): the caller passes a full `n`-byte
//! buffer; bytes `0..k` are the message, bytes `k..n` are overwritten with parity.
//! Invariant preserved: `C(alpha^i) == 0` for `i` in `0..e`, negating the remainder in
//! non-binary fields since subtraction is no longer XOR there.

use crate::field::{ByteField, GaloisField};
use crate::poly::poly_mod_x_n;
use crate::rs::generator::Generator;

/// One step of the rotating-remainder register: feed `byte` in, return the updated
/// remainder. Used by [`SliceEncoder`], which needs to pause mid-register to build its
/// tables and to finish off a trailing partial chunk.
fn step<F: GaloisField>(rem: &mut [F::Elem], g_tail: &[F::Elem], byte: F::Elem) {
    let e = rem.len();
    let head = F::add(rem[0], byte);
    for i in 0..e - 1 {
        rem[i] = rem[i + 1];
    }
    rem[e - 1] = F::zero();
    if !F::is_zero(head) {
        for i in 0..e {
            rem[i] = F::add(rem[i], F::mul(g_tail[i], head));
        }
    }
}

fn negate_for_field<F: GaloisField>(rem: &mut [F::Elem]) {
    if F::CHARACTERISTIC != 2 {
        for c in rem.iter_mut() {
            *c = F::sub(F::zero(), *c);
        }
    }
}

/// `data * x^e mod g(x)`, via [`poly_mod_x_n`].
pub fn encode_basic<F: GaloisField>(data: &[F::Elem], gen: &Generator<F>) -> Vec<F::Elem> {
    let mut rem = poly_mod_x_n::<F>(data, gen.tail());
    negate_for_field::<F>(&mut rem);
    rem
}

/// Byte-indexed LUT encoder: `q` rows of `e` bytes, row `v` holding `v * g_tail`. Only
/// applicable to byte fields (`q <= 256`), per spec.md §4.6.
pub struct ByteLutEncoder<F: ByteField> {
    rows: Vec<Vec<F::Elem>>,
    e: usize,
}

impl<F: ByteField> ByteLutEncoder<F> {
    pub fn build(gen: &Generator<F>) -> Self {
        let e = gen.ecc();
        let tail = gen.tail();
        let mut rows = Vec::with_capacity(F::order());
        for v in 0..F::order() {
            let v = F::from_index(v);
            let mut row = vec![F::zero(); e];
            for i in 0..e {
                row[i] = F::mul(tail[i], v);
            }
            rows.push(row);
        }
        ByteLutEncoder { rows, e }
    }

    pub fn encode(&self, data: &[F::Elem]) -> Vec<F::Elem> {
        let mut rem = vec![F::zero(); self.e];
        for &byte in data {
            let head = F::add(rem[0], byte);
            for i in 0..self.e - 1 {
                rem[i] = rem[i + 1];
            }
            rem[self.e - 1] = F::zero();
            let row = &self.rows[F::to_index(head)];
            for i in 0..self.e {
                rem[i] = F::add(rem[i], row[i]);
            }
        }
        negate_for_field::<F>(&mut rem);
        rem
    }
}

/// Slice-by-`N` encoder: only defined when `e == N` (one machine word's worth of
/// parity) and `p == 2` (spec.md §4.6). `table[j][v]` holds the `e`-byte remainder
/// reached by feeding value `v` at lane `j` into the all-zero register and letting it
/// propagate through the remaining `e-1-j` zero-input steps — `table[0]` is a single
/// step (the same per-byte contribution [`ByteLutEncoder`]'s rows hold), and each
/// further table is the previous one advanced by one more zero-input step. Because the
/// rotating-remainder recurrence is linear in `(register, input byte)` jointly, the
/// full `e`-byte slice's effect is exactly the XOR of every lane's individually
/// precomputed contribution, carried register included (the carried-in register is
/// folded in as though it were lane 0's input, XORed in before the lookup).
pub struct SliceEncoder<F: ByteField> {
    tables: Vec<Vec<Vec<F::Elem>>>,
    gen_tail: Vec<F::Elem>,
    e: usize,
}

impl<F: ByteField> SliceEncoder<F> {
    pub fn build(gen: &Generator<F>) -> Self {
        debug_assert_eq!(F::CHARACTERISTIC, 2, "slice-by-N encoding requires a binary field");
        let e = gen.ecc();
        let tail = gen.tail().to_vec();
        let q = F::order();

        let mut table0 = Vec::with_capacity(q);
        for v in 0..q {
            let mut rem = vec![F::zero(); e];
            step::<F>(&mut rem, &tail, F::from_index(v));
            table0.push(rem);
        }

        let mut tables = vec![table0];
        for j in 1..e {
            let prev = &tables[j - 1];
            let mut tj = Vec::with_capacity(q);
            for v in 0..q {
                let mut rem = prev[v].clone();
                step::<F>(&mut rem, &tail, F::zero());
                tj.push(rem);
            }
            tables.push(tj);
        }

        SliceEncoder { tables, gen_tail: tail, e }
    }

    pub fn encode(&self, data: &[F::Elem]) -> Vec<F::Elem> {
        let e = self.e;
        let mut rem = vec![F::zero(); e];
        let mut chunks = data.chunks_exact(e);
        for chunk in &mut chunks {
            let mixed: Vec<F::Elem> = (0..e).map(|j| F::add(rem[j], chunk[j])).collect();
            let mut next = vec![F::zero(); e];
            for j in 0..e {
                let row = &self.tables[e - j - 1][F::to_index(mixed[j])];
                for i in 0..e {
                    next[i] = F::add(next[i], row[i]);
                }
            }
            rem = next;
        }
        for &byte in chunks.remainder() {
            step::<F>(&mut rem, &self.gen_tail, byte);
        }
        negate_for_field::<F>(&mut rem);
        rem
    }
}
