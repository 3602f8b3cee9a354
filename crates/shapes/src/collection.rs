use std::io;

use coordinates::Number;
use tracing::debug;

use crate::{CollectionError, Shape, ShapeHandle};

/// Owned shapes of any variant, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ShapeCollection<T: Number> {
    shapes: Vec<ShapeHandle<T>>,
}

impl<T: Number> ShapeCollection<T> {
    pub fn new() -> Self {
        ShapeCollection { shapes: Vec::new() }
    }

    pub fn add(&mut self, shape: ShapeHandle<T>) {
        debug!(kind = %shape.kind(), index = self.shapes.len(), "adding shape");
        self.shapes.push(shape);
    }

    /// Out of range indices are ignored rather than reported.
    pub fn remove(&mut self, index: usize) -> Option<ShapeHandle<T>> {
        if index >= self.shapes.len() {
            debug!(index, len = self.shapes.len(), "ignoring removal past the end");
            return None;
        }
        let removed = self.shapes.remove(index);
        debug!(kind = %removed.kind(), index, "removed shape");
        Some(removed)
    }

    pub fn get(&mut self, index: usize) -> Result<&mut ShapeHandle<T>, CollectionError> {
        let len = self.shapes.len();
        self.shapes
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    pub fn size(&self) -> usize {
        self.len()
    }
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape<T>> + '_ {
        self.shapes.iter().map(|shape| shape.as_ref())
    }

    /// Vertices, center, area and regularity of every shape, numbered from 1.
    pub fn print_all(&self, sink: &mut impl io::Write, precision: usize) -> io::Result<()> {
        for (i, shape) in self.iter().enumerate() {
            writeln!(sink, "Figure {}:", i + 1)?;
            writeln!(sink, "{:.*}", precision, shape)?;
            writeln!(sink, "  Geometric center: {:.*}", precision, shape.center())?;
            writeln!(sink, "  Area: {:.*}", precision, shape.area())?;
            writeln!(
                sink,
                "  Is regular: {}\n",
                if shape.is_regular() { "Yes" } else { "No" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use coordinates::Point;
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Hexagon, Octagon, ShapeKind, Triangle};

    fn triangle() -> Triangle<f64> {
        Triangle::new([Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)])
    }

    fn filled() -> ShapeCollection<f64> {
        let mut shapes = ShapeCollection::new();
        shapes.add(Box::new(triangle()));
        shapes.add(Box::new(Hexagon::new(Point::new(0.0, 0.0), 2.0)));
        shapes.add(Box::new(Octagon::new(Point::new(0.0, 0.0), 1.0)));
        shapes
    }

    fn kinds(shapes: &ShapeCollection<f64>) -> Vec<ShapeKind> {
        shapes.iter().map(|shape| shape.kind()).collect()
    }

    #[test]
    fn test_empty_total_area_is_zero() {
        let shapes = ShapeCollection::<f64>::new();
        assert_eq!(shapes.total_area(), 0.0);
        assert!(shapes.is_empty());
    }
    #[test]
    fn test_total_area_sums_every_shape() {
        assert_about_eq!(filled().total_area(), 6.0 + 10.392304845413264 + 2.0 * 2.0_f64.sqrt());
    }
    #[test]
    fn test_get_returns_what_was_added() {
        let mut shapes = filled();
        let added = Hexagon::new(Point::new(9.0, 9.0), 0.5);
        shapes.add(Box::new(added));
        let last = shapes.size() - 1;
        assert!(shapes.get(last).unwrap().equals(&added));
    }
    #[test]
    fn test_get_out_of_range_fails() {
        let mut shapes = filled();
        assert_eq!(
            shapes.get(3).unwrap_err(),
            CollectionError::IndexOutOfRange { index: 3, len: 3 }
        );
    }
    #[test]
    fn test_get_allows_mutation_in_place() {
        let mut shapes = filled();
        shapes
            .get(1)
            .unwrap()
            .deserialize_vertices(&mut "1 1 1".as_bytes())
            .unwrap();
        assert_eq!(shapes.get(1).unwrap().center(), Point::new(1.0, 1.0));
    }
    #[test]
    fn test_remove_keeps_order() {
        let mut shapes = filled();
        let removed = shapes.remove(1).unwrap();
        assert_eq!(removed.kind(), ShapeKind::Hexagon);
        assert_eq!(kinds(&shapes), vec![ShapeKind::Triangle, ShapeKind::Octagon]);
    }
    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut empty = ShapeCollection::<f64>::new();
        assert!(empty.remove(0).is_none());
        assert!(empty.is_empty());

        let mut shapes = filled();
        assert!(shapes.remove(shapes.len()).is_none());
        assert!(shapes.remove(usize::MAX).is_none());
        assert_eq!(shapes.len(), 3);
    }
    #[test]
    fn test_cloned_collection_is_deep() {
        let original = filled();
        let mut copy = original.clone();
        copy.get(0)
            .unwrap()
            .deserialize_vertices(&mut "0 0 1 0 0 1".as_bytes())
            .unwrap();
        copy.remove(2);
        assert_eq!(original.len(), 3);
        assert_eq!(original.total_area(), filled().total_area());
        assert!(original.iter().next().unwrap().equals(&triangle()));
    }
    #[test]
    fn test_print_all() {
        let mut shapes = ShapeCollection::new();
        shapes.add(Box::new(triangle()));
        shapes.add(Box::new(Triangle::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(5.0, 7.0),
        ])));
        let mut out = Vec::new();
        shapes.print_all(&mut out, 1).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Figure 1:\n\
             Triangle vertices: (0.0, 0.0) (4.0, 0.0) (2.0, 3.0) \n  \
             Geometric center: (2.0, 1.0)\n  \
             Area: 6.0\n  \
             Is regular: Yes\n\n\
             Figure 2:\n\
             Triangle vertices: (0.0, 0.0) (2.0, 0.0) (5.0, 7.0) \n  \
             Geometric center: (2.3, 2.3)\n  \
             Area: 7.0\n  \
             Is regular: No\n\n"
        );
    }
}
