use geo::{Coord, Point, Polygon, Rotate, Translate};

/// Maps a scalar parameter `d` to a moved copy of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Counter-clockwise rotation by `d` radians about `pivot`.
    Rotation { pivot: Coord<f64> },
    /// Translation by `direction * scale * d`.
    Translation { direction: Coord<f64>, scale: f64 },
}

impl Motion {
    pub fn rotation(x: f64, y: f64) -> Self {
        Motion::Rotation {
            pivot: Coord { x, y },
        }
    }

    pub fn translation(dx: f64, dy: f64, scale: f64) -> Self {
        Motion::Translation {
            direction: Coord { x: dx, y: dy },
            scale,
        }
    }

    pub fn apply(&self, shape: &Polygon<f64>, d: f64) -> Polygon<f64> {
        match *self {
            Motion::Rotation { pivot } => shape.rotate_around_point(d.to_degrees(), Point(pivot)),
            Motion::Translation { direction, scale } => {
                shape.translate(direction.x * scale * d, direction.y * scale * d)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Motion::Rotation { .. } => "rotation",
            Motion::Translation { .. } => "translation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Disk;
    use geo::Centroid;

    fn center(p: &Polygon<f64>) -> (f64, f64) {
        let c = p.centroid().unwrap();
        (c.x(), c.y())
    }

    #[test_log::test]
    fn rotation_by_zero_is_identity() {
        let disk = Disk::new(5., 0., 2.).to_polygon(16);
        let (x, y) = center(&Motion::rotation(0., 0.).apply(&disk, 0.));
        assert!((x - 5.).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test_log::test]
    fn rotation_is_counter_clockwise_about_pivot() {
        let disk = Disk::new(5., 0., 2.).to_polygon(16);
        let rot = Motion::rotation(0., 0.);

        let (x, y) = center(&rot.apply(&disk, std::f64::consts::FRAC_PI_2));
        assert!(x.abs() < 1e-9);
        assert!((y - 5.).abs() < 1e-9);

        let (x, y) = center(&rot.apply(&disk, std::f64::consts::PI));
        assert!((x + 5.).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test_log::test]
    fn translation_is_proportional_to_parameter() {
        let disk = Disk::new(1., 1., 1.).to_polygon(16);
        let trans = Motion::translation(-1., 0., 5.);
        let (x, y) = center(&trans.apply(&disk, 0.5));
        assert!((x - (1. - 2.5)).abs() < 1e-9);
        assert!((y - 1.).abs() < 1e-9);
    }
}
