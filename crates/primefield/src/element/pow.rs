use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::bits::BitIteratorBE;
use crate::{FieldElement, FieldError};

impl FieldElement {
    /// Computes `self^exponent` for any integer exponent.
    ///
    /// For a non-zero base the exponent is reduced modulo `order - 1`
    /// (Fermat's little theorem), which makes negative exponents powers of
    /// the inverse. Zero has no inverse, so a negative exponent on zero fails
    /// with [`FieldError::ZeroToNonPositivePower`]. `0^0` is one.
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Result<FieldElement, FieldError> {
        let exponent = exponent.into();

        if self.is_zero() {
            return match exponent.sign() {
                Sign::Minus => Err(FieldError::ZeroToNonPositivePower(exponent)),
                Sign::NoSign => Ok(self.one_like()),
                Sign::Plus => Ok(self.zero_like()),
            };
        }

        let group_order = BigInt::from(self.order() - BigUint::one());
        let mut reduced = exponent % &group_order;
        if reduced.sign() == Sign::Minus {
            reduced += &group_order;
        }

        Ok(self.pow_unsigned(reduced.magnitude()))
    }

    /// Square-and-multiply over the bits of `exp`, most significant first.
    pub(crate) fn pow_unsigned(&self, exp: &BigUint) -> FieldElement {
        let mut res = self.one_like();
        for i in BitIteratorBE::without_leading_zeros(exp.to_u64_digits()) {
            res = res.square();
            if i {
                res = res.mul_unchecked(self);
            }
        }
        res
    }
}
