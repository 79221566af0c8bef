use num_bigint::BigUint;

use crate::{FieldElement, FieldError};

impl FieldElement {
    /// Add two field elements
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_order(x, "add")?;
        Ok(self.add_unchecked(x))
    }

    /// Subtract two field elements, the result is the non-negative residue.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_order(x, "sub")?;
        Ok(self.sub_unchecked(x))
    }

    /// Negate a field element
    pub fn negate(&self) -> FieldElement {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(self.order() - self.value())
        }
    }

    /// Double a field element
    pub fn double(&self) -> FieldElement {
        self.add_unchecked(self)
    }

    fn add_unchecked(&self, x: &FieldElement) -> FieldElement {
        let sum = self.value() + x.value();
        self.with_value(reduce_once(sum, self.order()))
    }

    fn sub_unchecked(&self, x: &FieldElement) -> FieldElement {
        if x.value() > self.value() {
            // self - x + order, computed without leaving the naturals
            self.with_value(self.order() - (x.value() - self.value()))
        } else {
            self.with_value(self.value() - x.value())
        }
    }
}

/// Reduces a value below `2 * order` into `[0, order)`.
fn reduce_once(x: BigUint, order: &BigUint) -> BigUint {
    if &x >= order {
        x - order
    } else {
        x
    }
}

impl std::ops::Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}
