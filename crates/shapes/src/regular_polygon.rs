use std::f64::consts::TAU;
use std::fmt;

use coordinates::{Number, Point};
use euclid::Angle;
use getset::CopyGetters;

/// Below this, a unit-circle component is floating point noise (`cos(π/2)` and friends).
const UNIT_COMPONENT_NOISE: f64 = 1e-12;

/// A regular polygon pinned down by its center and circumradius.
///
/// Vertices are never stored, only derived, so these cannot stop being regular.
#[derive(Debug, Default, Clone, Copy, PartialEq, CopyGetters)]
pub struct RegularPolygon<T: Number, const SIDES: usize> {
    center: Point<T>,
    #[get_copy = "pub"]
    radius: T,
}

impl<T: Number, const SIDES: usize> RegularPolygon<T, SIDES> {
    pub fn new(center: Point<T>, radius: T) -> Self {
        RegularPolygon { center, radius }
    }

    pub fn center_point(&self) -> Point<T> {
        self.center
    }

    /// Vertex `i` sits at angle `2πi/SIDES`, starting on the +x axis.
    pub fn derived_vertices(&self) -> [Point<f64>; SIDES] {
        let center = self.center.to_f64();
        let radius: f64 = self.radius.as_();
        std::array::from_fn(|i| {
            let angle = Angle::radians(TAU * i as f64 / SIDES as f64);
            let direction = Point::from_angle_and_length(angle, 1.0);
            center + Point::new(without_noise(direction.x), without_noise(direction.y)) * radius
        })
    }

    pub(crate) fn set(&mut self, [x, y, radius]: [T; 3]) {
        self.center = Point::new(x, y);
        self.radius = radius;
    }

    pub(crate) fn write_center_and_radius(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{} {} {}", self.center.x, self.center.y, self.radius)
    }
}

fn without_noise(component: f64) -> f64 {
    if component.abs() < UNIT_COMPONENT_NOISE {
        0.0
    } else {
        component
    }
}

/// Everything but the area formula is shared between the regular variants.
macro_rules! impl_shape_for_regular_polygon {
    ($Type:ident, kind: $kind:ident) => {
        impl<T: coordinates::Number> $crate::Shape<T> for $Type<T> {
            fn view(&self) -> $crate::ShapeRef<'_, T> {
                $crate::ShapeRef::$kind(self)
            }

            fn center(&self) -> coordinates::Point<f64> {
                self.center_point().to_f64()
            }

            fn area(&self) -> f64 {
                Self::area_for_radius(num::traits::AsPrimitive::<f64>::as_(self.radius()))
            }

            fn vertices(&self) -> Vec<coordinates::Point<f64>> {
                self.derived_vertices().to_vec()
            }

            fn serialize_vertices(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::shape::write_vertex_list(f, $crate::ShapeKind::$kind, &self.derived_vertices())?;
                f.write_str("(Center: ")?;
                std::fmt::Display::fmt(&self.center_point(), f)?;
                f.write_str(", Radius: ")?;
                std::fmt::Display::fmt(&self.radius(), f)?;
                f.write_str(")")
            }

            fn write_parameters(&self, sink: &mut dyn std::fmt::Write) -> std::fmt::Result {
                self.write_center_and_radius(sink)
            }

            fn deserialize_vertices(
                &mut self,
                source: &mut dyn std::io::BufRead,
            ) -> Result<(), $crate::ShapeError> {
                let parameters = $crate::token_stream::read_numbers::<T, 3>(source)?;
                self.set(parameters);
                Ok(())
            }

            fn assign_from(&mut self, other: &dyn $crate::Shape<T>) -> bool {
                match other.view() {
                    $crate::ShapeRef::$kind(same) => {
                        *self = *same;
                        true
                    }
                    _ => false,
                }
            }

            fn is_regular(&self) -> bool {
                true
            }
        }
    };
}
pub(crate) use impl_shape_for_regular_polygon;
