use num_bigint::BigUint;
use num_traits::One;

use crate::FieldElement;

/// Candidates tried when looking for a quadratic non-residue. For a prime
/// modulus the smallest non-residue is far below this.
const NON_RESIDUE_SEARCH_LIMIT: u32 = 1 << 16;

impl FieldElement {
    /// Euler's criterion, `self^((p-1)/2) == 1`. Zero is a residue.
    pub fn is_quadratic_residue(&self) -> bool {
        if self.is_zero() || self.order() == &BigUint::from(2u32) {
            return true;
        }
        let exp = (self.order() - BigUint::one()) >> 1usize;
        self.pow_unsigned(&exp).is_one()
    }

    /// Computes a square root, `None` if `self` is not a square.
    ///
    /// Uses `self^((p+1)/4)` when `p = 3 mod 4` and Tonelli-Shanks otherwise.
    /// Which of the two roots is returned is unspecified.
    pub fn sqrt(&self) -> Option<FieldElement> {
        let p = self.order();
        if self.is_zero() || p == &BigUint::from(2u32) {
            return Some(self.clone());
        }
        if !self.is_quadratic_residue() {
            return None;
        }

        let root = if p % BigUint::from(4u32) == BigUint::from(3u32) {
            self.pow_unsigned(&((p + BigUint::one()) >> 2usize))
        } else {
            self.tonelli_shanks()?
        };

        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Based on "Square root computation over even extension fields" by
    /// Adj and Rodríguez-Henríquez (2012, alg. 5), restricted to prime fields.
    fn tonelli_shanks(&self) -> Option<FieldElement> {
        let one = BigUint::one();
        let p_minus_one = self.order() - &one;

        // p - 1 = q * 2^s with q odd
        let s = p_minus_one.trailing_zeros()?;
        let q = &p_minus_one >> s;
        tracing::trace!(two_adicity = s, "Computing Tonelli-Shanks square root");

        let z = self.quadratic_non_residue(NON_RESIDUE_SEARCH_LIMIT)?;

        let mut v = s;
        let mut c = z.pow_unsigned(&q);
        let mut b = self.pow_unsigned(&q);
        let mut x = self.pow_unsigned(&((q + &one) >> 1usize));

        while !b.is_one() {
            let mut k = 0;
            let mut b2k = b.clone();
            while !b2k.is_one() {
                b2k = b2k.square();
                k += 1;
                if k == v {
                    return None;
                }
            }

            let mut w = c;
            for _ in 1..(v - k) {
                w = w.square();
            }

            c = w.square();
            b = b.mul_unchecked(&c);
            x = x.mul_unchecked(&w);
            v = k;
        }

        Some(x)
    }

    /// Smallest element in `[2, limit)` failing Euler's criterion.
    fn quadratic_non_residue(&self, limit: u32) -> Option<FieldElement> {
        let limit = BigUint::from(limit).min(self.order().clone());
        let mut z = BigUint::from(2u32);
        while z < limit {
            let candidate = self.with_value(z.clone());
            if !candidate.is_quadratic_residue() {
                return Some(candidate);
            }
            z += 1u32;
        }
        tracing::trace!(order=%self.order(), %limit, "No quadratic non-residue found");
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::PrimeField;

    fn fe(value: i64, order: u64) -> FieldElement {
        FieldElement::new(value, order).unwrap()
    }

    #[rstest]
    #[case(13)]
    #[case(17)]
    #[case(31)]
    #[case(97)]
    #[case(257)]
    fn residues_match_squares(#[case] order: u64) {
        let squares: std::collections::HashSet<_> =
            (0..order as i64).map(|v| fe(v, order).square()).collect();

        for v in 0..order as i64 {
            let x = fe(v, order);
            assert_eq!(x.is_quadratic_residue(), squares.contains(&x), "{x}");
            match x.sqrt() {
                Some(root) => assert_eq!(root.square(), x),
                None => assert!(!squares.contains(&x), "{x} has a root"),
            }
        }
    }

    #[rstest]
    #[case(2, 13)]
    #[case(5, 13)]
    #[case(3, 17)]
    #[case(3, 31)]
    fn non_residue(#[case] value: i64, #[case] order: u64) {
        let x = fe(value, order);
        assert!(!x.is_quadratic_residue());
        assert_eq!(x.sqrt(), None);
    }

    #[rstest]
    #[case(3, None)]
    #[case(4, Some(3))]
    #[case(1000, Some(3))]
    fn non_residue_search_is_bounded(#[case] limit: u32, #[case] expected: Option<i64>) {
        // 2 is a square modulo 17, 3 is not
        let x = fe(4, 17);
        assert_eq!(
            x.quadratic_non_residue(limit),
            expected.map(|v| fe(v, 17))
        );
    }

    #[test_log::test]
    fn composite_order_terminates() {
        // 2^64 + 1 = 274177 * 67280421310721, and 4 passes Euler's criterion
        let order = (BigUint::one() << 64usize) + BigUint::one();
        let x = FieldElement::new(4, order).unwrap();
        if let Some(root) = x.sqrt() {
            assert_eq!(root.square(), x);
        }
    }

    #[test]
    fn characteristic_two() {
        assert_eq!(fe(0, 2).sqrt(), Some(fe(0, 2)));
        assert_eq!(fe(1, 2).sqrt(), Some(fe(1, 2)));
    }

    #[rstest]
    #[case::secp256k1(PrimeField::secp256k1())]
    #[case::stark252(PrimeField::stark252())]
    fn sqrt_random(#[case] field: PrimeField) {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let x = field.random(&mut rng);
            let square = x.square();
            let root = square.sqrt().unwrap();
            assert!(root == x || root == x.negate());
        }
    }

    #[test_log::test]
    fn stark252_minus_one() {
        // p = 1 mod 4 so -1 is a square
        let field = PrimeField::stark252();
        let minus_one = field.one().negate();
        let root = minus_one.sqrt().unwrap();
        assert_eq!(root.square(), minus_one);
    }
}
