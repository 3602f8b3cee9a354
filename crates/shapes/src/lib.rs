//! Triangles, hexagons and octagons behind one object-safe [`Shape`] trait,
//! and an owning [`ShapeCollection`] that aggregates over them.

mod collection;
mod error;
mod hexagon;
mod octagon;
mod regular_polygon;
mod shape;
pub mod token_stream;
mod triangle;

pub use collection::ShapeCollection;
pub use error::{CollectionError, ShapeError};
pub use hexagon::Hexagon;
pub use octagon::Octagon;
pub use regular_polygon::RegularPolygon;
pub use shape::{Shape, ShapeHandle, ShapeKind, ShapeRef};
pub use triangle::{Triangle, ISOSCELES_TOLERANCE};

pub use coordinates::{Number, Point};
