//! Primefield is a library for arithmetic over finite fields of prime order,
//! the building block of elliptic curve and signature code.

/// Big-endian bit iteration used by exponentiation.
pub mod bits;

/// Field elements and their arithmetic.
pub mod element;

/// Errors returned by field construction and arithmetic.
pub mod error;

/// Field descriptors and presets.
pub mod field;

pub use bits::BitIteratorBE;
pub use element::FieldElement;
pub use error::FieldError;
pub use field::PrimeField;
