//! Forward error correction over small finite fields: generic Reed-Solomon (GF(2^8),
//! GF(257), and any other field implementing [`field::GaloisField`]) plus the fixed
//! binary BCH(63,45) and BCH(63,30) codecs.
//!
//! - [`field`]: GF(2^m) and GF(p) arithmetic, plus the wide-word packed-lane kernel.
//! - [`poly`]: high-coefficient-first polynomial operations shared by generator
//!   precompute, Berlekamp-Massey, and Forney.
//! - [`rs`]: the Reed-Solomon codec itself ([`rs::ReedSolomon`]) and its building
//!   blocks (generator, encode strategies, syndromes, Berlekamp-Massey, root finding,
//!   Forney).
//! - [`bch`]: the fixed-field (63,45)/(63,30) binary BCH codec.
//! - [`error`]: construction and decode error types shared across the above.

pub mod bch;
pub mod error;
pub mod field;
pub mod poly;
pub mod rs;

pub use bch::{check_63_30, check_63_45, decode_63_30, decode_63_45, encode_63_30, encode_63_45, BchField};
pub use error::{ConfigError, ConfigResult, DecodeError, DecodeResult};
pub use field::binary::{BinaryExt, Gf256, Gf256Default};
pub use field::prime::{Gf257, Prime};
pub use field::{ByteField, GaloisField};
pub use rs::ReedSolomon;
