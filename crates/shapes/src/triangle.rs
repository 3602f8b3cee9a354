use std::fmt::{self, Formatter};
use std::io::BufRead;

use approx::abs_diff_eq;
use coordinates::{Number, Point};
use getset::Getters;
use itertools::Itertools;

use crate::shape::write_vertex_list;
use crate::token_stream::read_numbers;
use crate::{Shape, ShapeError, ShapeKind, ShapeRef};

/// How far apart two side lengths may be and still count as equal.
pub const ISOSCELES_TOLERANCE: f64 = 1e-6;

/// Three explicitly stored corners, in the order they were given.
#[derive(Debug, Default, Clone, PartialEq, Getters)]
pub struct Triangle<T: Number> {
    #[get = "pub"]
    corners: [Point<T>; 3],
}

impl<T: Number> Triangle<T> {
    pub fn new(corners: [Point<T>; 3]) -> Self {
        Triangle { corners }
    }

    pub fn side_lengths(&self) -> [f64; 3] {
        let [a, b, c] = &self.corners;
        [a.distance(b), b.distance(c), c.distance(a)]
    }

    pub fn is_isosceles(&self) -> bool {
        self.side_lengths()
            .into_iter()
            .tuple_combinations::<(_, _)>()
            .any(|(a, b): (f64, f64)| abs_diff_eq!(a, b, epsilon = ISOSCELES_TOLERANCE))
    }
}

impl<T: Number> Shape<T> for Triangle<T> {
    fn view(&self) -> ShapeRef<'_, T> {
        ShapeRef::Triangle(self)
    }

    fn center(&self) -> Point<f64> {
        let [a, b, c] = self.corners.map(|corner| corner.to_f64());
        let sum = a + b + c;
        Point::new(sum.x / 3.0, sum.y / 3.0)
    }

    // shoelace
    fn area(&self) -> f64 {
        let [a, b, c] = self.corners.map(|corner| corner.to_f64());
        ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
    }

    fn vertices(&self) -> Vec<Point<f64>> {
        self.corners.iter().map(Point::to_f64).collect()
    }

    fn serialize_vertices(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_vertex_list(f, ShapeKind::Triangle, &self.vertices())
    }

    fn write_parameters(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        let numbers = self.corners.iter().flat_map(|corner| [corner.x, corner.y]);
        write!(sink, "{}", numbers.format(" "))
    }

    fn deserialize_vertices(&mut self, source: &mut dyn BufRead) -> Result<(), ShapeError> {
        let [x1, y1, x2, y2, x3, y3] = read_numbers::<T, 6>(source)?;
        self.corners = [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)];
        Ok(())
    }

    fn assign_from(&mut self, other: &dyn Shape<T>) -> bool {
        match other.view().as_triangle() {
            Some(triangle) => {
                self.clone_from(*triangle);
                true
            }
            None => false,
        }
    }

    fn is_regular(&self) -> bool {
        self.is_isosceles()
    }
}
