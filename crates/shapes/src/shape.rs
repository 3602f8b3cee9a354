use std::fmt::{self, Debug, Display, Formatter};
use std::io::BufRead;

use coordinates::{Number, Point};
use dyn_clone::DynClone;
use enum_as_inner::EnumAsInner;
use itertools::Itertools;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::{Hexagon, Octagon, ShapeError, Triangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum ShapeKind {
    Triangle,
    Hexagon,
    Octagon,
}

/// A borrow of a shape tagged with its variant, so that comparisons and
/// assignments between handles can check the variant before looking inside.
#[derive(Debug, Clone, Copy, PartialEq, EnumAsInner)]
pub enum ShapeRef<'a, T: Number> {
    Triangle(&'a Triangle<T>),
    Hexagon(&'a Hexagon<T>),
    Octagon(&'a Octagon<T>),
}

impl<T: Number> ShapeRef<'_, T> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRef::Triangle(_) => ShapeKind::Triangle,
            ShapeRef::Hexagon(_) => ShapeKind::Hexagon,
            ShapeRef::Octagon(_) => ShapeKind::Octagon,
        }
    }
}

pub type ShapeHandle<T> = Box<dyn Shape<T>>;

/// What every shape in a [`crate::ShapeCollection`] can do.
///
/// All measurements are in double precision whatever `T` is.
pub trait Shape<T: Number>: DynClone + Debug {
    fn view(&self) -> ShapeRef<'_, T>;

    fn center(&self) -> Point<f64>;
    fn area(&self) -> f64;
    fn vertices(&self) -> Vec<Point<f64>>;

    /// Human readable vertex list. Honors the formatter's precision.
    fn serialize_vertices(&self, f: &mut Formatter<'_>) -> fmt::Result;
    /// The numbers `deserialize_vertices` expects, in the order it expects them.
    fn write_parameters(&self, sink: &mut dyn fmt::Write) -> fmt::Result;
    /// Replaces the defining parameters with numbers read from `source`.
    ///
    /// Either every number is read and the shape changes, or an error comes
    /// back and the shape is exactly as it was.
    fn deserialize_vertices(&mut self, source: &mut dyn BufRead) -> Result<(), ShapeError>;

    /// Copies `other` into `self` if both are the same variant. Returns whether it did.
    fn assign_from(&mut self, other: &dyn Shape<T>) -> bool;

    /// Whether the shape passes its variant's acceptance rule.
    ///
    /// Triangles only need to be isosceles. Hexagons and octagons are regular
    /// by construction.
    fn is_regular(&self) -> bool;

    fn kind(&self) -> ShapeKind {
        self.view().kind()
    }
    fn perimeter(&self) -> f64 {
        self.vertices()
            .iter()
            .circular_tuple_windows()
            .map(|(a, b): (&Point<f64>, &Point<f64>)| a.distance(b))
            .sum()
    }
    fn equals(&self, other: &dyn Shape<T>) -> bool {
        self.view() == other.view()
    }
}

dyn_clone::clone_trait_object!(<T> Shape<T> where T: Number);

impl<T: Number> Display for dyn Shape<T> + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.serialize_vertices(f)
    }
}

impl<T: Number> PartialEq for dyn Shape<T> + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

pub(crate) fn write_vertex_list(
    f: &mut Formatter<'_>,
    kind: ShapeKind,
    vertices: &[Point<f64>],
) -> fmt::Result {
    write!(f, "{} vertices: ", kind)?;
    for vertex in vertices {
        Display::fmt(vertex, f)?;
        f.write_str(" ")?;
    }
    Ok(())
}
