//! Overlap of a moving disk with a fixed reference disk.
//!
//! All geometry is computed eagerly in [`Simulation::new`]; rendering only
//! reads from the resulting tracks.

use geo::{Area, BooleanOps, MultiPolygon, Polygon};
use itertools_num::linspace;
use log::info;

use crate::config::SimulationConfig;
use crate::data::Disk;
use crate::motion::Motion;

/// `d_steps` evenly spaced parameter values over `[0, π]`, both ends included.
pub fn parameter_space(d_steps: usize) -> Vec<f64> {
    linspace(0., std::f64::consts::PI, d_steps).collect()
}

pub fn intersection(a: &Polygon<f64>, b: &Polygon<f64>) -> MultiPolygon<f64> {
    a.intersection(b)
}

pub fn intersection_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    intersection(a, b).unsigned_area()
}

/// Shape of an intersection, distinguishing the drawable single-polygon case.
#[derive(Clone, Debug)]
pub enum IntersectionShape {
    /// No parts, or a single part collapsed to a point or a line.
    Empty,
    Polygon(Polygon<f64>),
    /// Several parts, or one part with holes.
    MultiPart(MultiPolygon<f64>),
}

impl IntersectionShape {
    pub fn of(a: &Polygon<f64>, b: &Polygon<f64>) -> Self {
        Self::classify(intersection(a, b))
    }

    /// Parts are counted as returned by the clipper; a lens accompanied by a
    /// sliver is multi-part.
    pub fn classify(mut shape: MultiPolygon<f64>) -> Self {
        match shape.0.len() {
            0 => IntersectionShape::Empty,
            1 if is_degenerate(&shape.0[0]) => IntersectionShape::Empty,
            1 if shape.0[0].interiors().is_empty() => {
                IntersectionShape::Polygon(shape.0.remove(0))
            }
            _ => IntersectionShape::MultiPart(shape),
        }
    }

    /// The single simply-connected polygon, if that is what this shape is.
    pub fn polygon(&self) -> Option<&Polygon<f64>> {
        match self {
            IntersectionShape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

fn is_degenerate(part: &Polygon<f64>) -> bool {
    part.exterior().0.len() < 4 || part.unsigned_area() <= f64::EPSILON
}

/// Moved copies of a disk under one motion, with their overlap fractions.
#[derive(Clone, Debug)]
pub struct Track {
    pub motion: Motion,
    pub disks: Vec<Polygon<f64>>,
    pub fractions: Vec<f64>,
}

impl Track {
    pub fn generate(
        reference: &Polygon<f64>,
        moving: &Polygon<f64>,
        motion: Motion,
        params: &[f64],
    ) -> Self {
        let reference_area = reference.unsigned_area();
        let disks: Vec<Polygon<f64>> = params.iter().map(|&d| motion.apply(moving, d)).collect();
        let fractions = disks
            .iter()
            .map(|disk| (intersection_area(reference, disk) / reference_area).clamp(0., 1.))
            .collect();
        Self {
            motion,
            disks,
            fractions,
        }
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Index and value of the largest overlap fraction (first one on ties).
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.fractions
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (n, f)| match best {
                Some((_, b)) if b >= f => best,
                _ => Some((n, f)),
            })
    }
}

/// Geometry results for both motion models, indexed by sample.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: SimulationConfig,
    pub params: Vec<f64>,
    pub reference: Polygon<f64>,
    pub rotation: Track,
    pub translation: Track,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let big_r = config.rotation_radius;
        let r = config.disk_radius;
        let params = parameter_space(config.d_steps);

        let reference = Disk::new(0., big_r, r).to_polygon(config.resolution);

        let rotating = Disk::new(big_r, 0., r).to_polygon(config.resolution);
        let rotation = Track::generate(&reference, &rotating, Motion::rotation(0., 0.), &params);

        // starts to the right of the reference and sweeps left across it
        let translating =
            Disk::new(big_r * std::f64::consts::FRAC_PI_2, big_r, r).to_polygon(config.resolution);
        let translation = Track::generate(
            &reference,
            &translating,
            Motion::translation(-1., 0., big_r),
            &params,
        );

        let sim = Self {
            config,
            params,
            reference,
            rotation,
            translation,
        };
        for track in [&sim.rotation, &sim.translation] {
            if let Some((n, f)) = track.peak() {
                info!(
                    "{} peak overlap {:.4} at sample {} (d = {:.4})",
                    track.motion.name(),
                    f,
                    n,
                    sim.params[n]
                );
            }
        }
        sim
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
