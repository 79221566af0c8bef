use num_bigint::BigUint;

use crate::{FieldElement, FieldError};

impl FieldElement {
    /// Computes the modular inverse as `self^(order - 2)`, which is valid
    /// because the order is prime.
    pub fn inverse(&self) -> Result<FieldElement, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.inverse_unchecked())
    }

    /// Divide by a field element, i.e. multiply with its inverse.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_order(x, "div")?;
        if x.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.mul_unchecked(&x.inverse_unchecked()))
    }

    // Callers guarantee a non-zero element, hence order >= 2.
    fn inverse_unchecked(&self) -> FieldElement {
        let exp = self.order() - BigUint::from(2u32);
        self.pow_unsigned(&exp)
    }
}
