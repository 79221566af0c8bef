use num_bigint::{BigInt, BigUint};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value lies outside `[0, order)`.
    #[error("Value {value} not in field range [0, {order})")]
    OutOfRange { value: BigInt, order: BigUint },
    /// A binary operation received elements of two different fields.
    #[error("Cannot combine elements of different fields: order {lhs} and order {rhs}")]
    IncompatibleOrder { lhs: BigUint, rhs: BigUint },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot raise zero to the negative power {0}")]
    ZeroToNonPositivePower(BigInt),
    #[error("Field order must be at least 2, got {0}")]
    InvalidOrder(BigUint),
}
