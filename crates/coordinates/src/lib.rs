//! Plain 2D points over any primitive number type.

mod error;
mod number;
mod point;
mod trait_alias_macro;

pub use error::GeometryError;
pub use number::{CheckedScalar, Number};
pub use point::Point;
