use std::sync::Arc;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::{FieldElement, FieldError};

/// Describes a prime field by its modulus.
///
/// Elements created through a `PrimeField` share its modulus. The modulus is
/// assumed to be prime; this is not verified.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    order: Arc<BigUint>,
}

impl PrimeField {
    /// Fails with [`FieldError::InvalidOrder`] if `order < 2`.
    pub fn new(order: impl Into<BigUint>) -> Result<Self, FieldError> {
        let order = order.into();
        if order < BigUint::from(2u32) {
            return Err(FieldError::InvalidOrder(order));
        }
        Ok(Self {
            order: Arc::new(order),
        })
    }

    /// The base field of secp256k1, p = 2^256 - 2^32 - 977
    pub fn secp256k1() -> Self {
        let order = (BigUint::one() << 256usize) - (BigUint::one() << 32usize) - 977u32;
        Self {
            order: Arc::new(order),
        }
    }

    /// The Starknet field,
    /// p = 2^251 + 17 * 2^192 + 1
    ///   = 3618502788666131213697322783095070105623107215331596699973092056135872020481
    pub fn stark252() -> Self {
        let order =
            (BigUint::one() << 251usize) + (BigUint::from(17u32) << 192usize) + BigUint::one();
        Self {
            order: Arc::new(order),
        }
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Number of bits needed to represent the modulus
    pub fn bits(&self) -> u64 {
        self.order.bits()
    }

    /// Creates the element `value` of this field, see [`FieldElement::new`].
    pub fn element(&self, value: impl Into<BigInt>) -> Result<FieldElement, FieldError> {
        FieldElement::new_in(value.into(), Arc::clone(&self.order))
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::zero(), Arc::clone(&self.order))
    }

    pub fn one(&self) -> FieldElement {
        FieldElement::from_reduced(BigUint::one(), Arc::clone(&self.order))
    }

    /// Whether `x` is an element of this field
    pub fn contains(&self, x: &FieldElement) -> bool {
        Arc::ptr_eq(&self.order, x.shared_order()) || self.order() == x.order()
    }

    /// Try to sample a random field element
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<FieldElement> {
        let s = rng.gen_biguint(self.bits());
        if &s < self.order() {
            Some(FieldElement::from_reduced(s, Arc::clone(&self.order)))
        } else {
            None
        }
    }

    /// Rejection sample a random field element
    pub fn random<R: Rng>(&self, rng: &mut R) -> FieldElement {
        loop {
            if let Some(s) = self.sample(rng) {
                return s;
            }
        }
    }
}

impl std::fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrimeField({})", self.order)
    }
}

impl std::fmt::Display for PrimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F_{}", self.order)
    }
}
