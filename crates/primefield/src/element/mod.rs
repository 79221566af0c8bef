mod additive;
mod inverse;
mod multiplicative;
mod pow;
mod sqrt;

use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::FieldError;

/// Element of the prime field with modulus `order`.
///
/// The residue always satisfies `0 <= value < order`. Elements are
/// immutable, every operation returns a new element sharing the modulus of
/// its operands.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    order: Arc<BigUint>,
}

impl FieldElement {
    /// Creates the element `value` of the field of order `order`.
    ///
    /// Fails with [`FieldError::OutOfRange`] if `value` is negative or not
    /// below `order`. The value is never reduced.
    pub fn new(value: impl Into<BigInt>, order: impl Into<BigUint>) -> Result<Self, FieldError> {
        Self::new_in(value.into(), Arc::new(order.into()))
    }

    pub(crate) fn new_in(value: BigInt, order: Arc<BigUint>) -> Result<Self, FieldError> {
        match value.to_biguint() {
            Some(v) if v < *order => Ok(Self { value: v, order }),
            _ => {
                tracing::trace!(%value, %order, "Rejected out-of-range field element");
                Err(FieldError::OutOfRange {
                    value,
                    order: order.as_ref().clone(),
                })
            }
        }
    }

    /// Wraps a residue which is already below `order`.
    pub(crate) fn from_reduced(value: BigUint, order: Arc<BigUint>) -> Self {
        debug_assert!(value < *order);
        Self { value, order }
    }

    /// An element of the same field with the given reduced residue.
    fn with_value(&self, value: BigUint) -> Self {
        Self::from_reduced(value, Arc::clone(&self.order))
    }

    /// The residue, in `[0, order)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// The modulus of the field this element belongs to.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub(crate) fn shared_order(&self) -> &Arc<BigUint> {
        &self.order
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn zero_like(&self) -> Self {
        self.with_value(BigUint::zero())
    }

    // `1 mod order` so that the trivial field of order 1 stays in range.
    fn one_like(&self) -> Self {
        self.with_value(BigUint::one() % self.order.as_ref())
    }

    /// Fails with [`FieldError::IncompatibleOrder`] unless both elements
    /// belong to the same field.
    fn check_order(&self, other: &Self, op: &'static str) -> Result<(), FieldError> {
        if Arc::ptr_eq(&self.order, &other.order) || self.order == other.order {
            Ok(())
        } else {
            tracing::debug!(op, lhs=%self.order, rhs=%other.order, "Field order mismatch");
            Err(FieldError::IncompatibleOrder {
                lhs: self.order.as_ref().clone(),
                rhs: other.order.as_ref().clone(),
            })
        }
    }
}

impl std::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldElement_{}({})", self.order, self.value)
    }
}

impl std::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
