use crate::{FieldElement, FieldError};

impl FieldElement {
    /// Multiply two field elements
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, x: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_order(x, "mul")?;
        Ok(self.mul_unchecked(x))
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul_unchecked(self)
    }

    pub(crate) fn mul_unchecked(&self, x: &FieldElement) -> FieldElement {
        self.with_value((self.value() * x.value()) % self.order())
    }
}
