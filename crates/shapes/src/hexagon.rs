use crate::regular_polygon::{impl_shape_for_regular_polygon, RegularPolygon};

pub type Hexagon<T> = RegularPolygon<T, 6>;

impl<T: coordinates::Number> Hexagon<T> {
    /// `(3√3/2)·r²`
    pub fn area_for_radius(radius: f64) -> f64 {
        3.0 * 3.0_f64.sqrt() / 2.0 * radius * radius
    }
}

impl_shape_for_regular_polygon!(Hexagon, kind: Hexagon);
