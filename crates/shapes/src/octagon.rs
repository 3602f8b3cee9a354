use std::f64::consts::SQRT_2;

use crate::regular_polygon::{impl_shape_for_regular_polygon, RegularPolygon};

pub type Octagon<T> = RegularPolygon<T, 8>;

impl<T: coordinates::Number> Octagon<T> {
    pub fn side_for_radius(radius: f64) -> f64 {
        radius * (2.0 - SQRT_2).sqrt()
    }

    /// `2(1+√2)·s²` with `s` the side length
    pub fn area_for_radius(radius: f64) -> f64 {
        let side = Self::side_for_radius(radius);
        2.0 * (1.0 + SQRT_2) * side * side
    }
}

impl_shape_for_regular_polygon!(Octagon, kind: Octagon);

#[cfg(test)]
mod tests {
    use coordinates::Point;
    use ntest::assert_about_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Shape;

    #[test]
    fn test_unit_area() {
        let octagon = Octagon::new(Point::new(0.0, 0.0), 1.0);
        assert_about_eq!(octagon.area(), 2.0 * SQRT_2);
        assert_about_eq!(octagon.area(), 2.828427, 1e-6);
    }
    #[test]
    fn test_side_matches_vertex_spacing() {
        let octagon = Octagon::new(Point::new(5.0, -5.0), 3.0);
        let vertices = octagon.vertices();
        assert_eq!(vertices.len(), 8);
        assert_about_eq!(
            vertices[0].distance(&vertices[1]),
            Octagon::<f64>::side_for_radius(3.0)
        );
        assert_about_eq!(octagon.perimeter(), 8.0 * Octagon::<f64>::side_for_radius(3.0));
    }
    #[test]
    fn test_integer_octagon() {
        let octagon = Octagon::new(Point::new(1, 1), 2);
        assert_eq!(octagon.center(), Point::new(1.0, 1.0));
        assert_about_eq!(octagon.area(), 8.0 * SQRT_2);
        assert!(octagon.is_regular());
    }
    #[test]
    fn test_parameters_read_back() {
        let octagon = Octagon::new(Point::new(-0.3, 12.0), 0.7);
        let mut text = String::new();
        octagon.write_parameters(&mut text).unwrap();
        assert_eq!(text, "-0.3 12 0.7");

        let mut read_back = Octagon::default();
        read_back.deserialize_vertices(&mut text.as_bytes()).unwrap();
        assert!(read_back.equals(&octagon));
    }
    #[test]
    fn test_serialize_vertices_starts_on_x_axis() {
        let octagon: Box<dyn Shape<i32>> = Box::new(Octagon::new(Point::new(0, 0), 1));
        let text = format!("{:.1}", octagon);
        assert!(text.starts_with("Octagon vertices: (1.0, 0.0) (0.7, 0.7) (0.0, 1.0) "));
        assert!(text.ends_with("(Center: (0, 0), Radius: 1)"));
    }
}
