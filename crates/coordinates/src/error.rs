#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result does not fit in the coordinate type")]
    Overflow,
}
