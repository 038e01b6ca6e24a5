use geo::{Coord, LineString, Polygon};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disk {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Disk {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Coord { x, y },
            radius,
        }
    }

    /// Approximates the disk by a regular polygon with `resolution` segments
    /// per quarter circle.
    pub fn to_polygon(&self, resolution: usize) -> Polygon<f64> {
        let segments = 4 * resolution.max(1);
        let coords: Vec<(f64, f64)> = (0..segments)
            .map(|i| {
                let t = 2. * std::f64::consts::PI * (i as f64) / (segments as f64);
                (
                    self.center.x + self.radius * t.cos(),
                    self.center.y + self.radius * t.sin(),
                )
            })
            .collect();
        Polygon::new(LineString::from(coords), vec![])
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
