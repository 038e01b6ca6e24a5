//! Two-panel frames: the disks on the left, the overlap curves on the right.

use std::f64::consts::PI;
use std::iter::once;

use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::overlap::{parameter_space, IntersectionShape, Simulation, Track};

const GREY: RGBColor = RGBColor(128, 128, 128);
const DISK_ALPHA: f64 = 0.25;
const LENS_ALPHA: f64 = 0.5;
const CURVE_TICKS: usize = 8;

type Panel<'b> = DrawingArea<BitMapBackend<'b>, Shift>;

fn outline(polygon: &geo::Polygon<f64>) -> Vec<(f64, f64)> {
    polygon.exterior().coords().map(|c| (c.x, c.y)).collect()
}

/// Largest centered square inside `area`.
fn square<'b>(area: &Panel<'b>) -> Panel<'b> {
    let (w, h) = area.dim_in_pixel();
    let side = w.min(h);
    let (dx, dy) = ((w - side) / 2, (h - side) / 2);
    area.margin(dy, dy, dx, dx)
}

/// Owns the frame buffer and draws one complete frame per sample index.
pub struct FrameRenderer<'a> {
    sim: &'a Simulation,
    width: u32,
    height: u32,
    limit: f64,
    buffer: Vec<u8>,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(sim: &'a Simulation, width: u32, height: u32) -> Self {
        let limit = sim.config.rotation_radius + 1.2 * sim.config.disk_radius;
        Self {
            sim,
            width,
            height,
            limit,
            buffer: vec![0; (width * height * 3) as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGB24 pixels of the last drawn frame.
    pub fn frame(&self) -> &[u8] {
        &self.buffer
    }

    /// Clears both panels and redraws them for sample `n`.
    pub fn draw_frame(&mut self, n: usize) -> Result<()> {
        let sim = self.sim;
        if n >= sim.len() {
            bail!("frame {} out of range, simulation has {} samples", n, sim.len());
        }
        let (width, height, limit) = (self.width, self.height, self.limit);

        let root = BitMapBackend::with_buffer(&mut self.buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let (left, right) = root.split_horizontally(width / 2);
        draw_disks(&square(&left), sim, n, limit)?;
        draw_curves(&square(&right), sim, n)?;
        root.present()?;
        Ok(())
    }
}

fn draw_disks(area: &Panel, sim: &Simulation, n: usize, limit: f64) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(-limit..limit, -limit..limit)?;

    chart.draw_series(once(Polygon::new(
        outline(&sim.reference),
        GREY.mix(DISK_ALPHA).filled(),
    )))?;

    for (track, color) in tracks(sim) {
        let moved = &track.disks[n];
        chart.draw_series(once(Polygon::new(outline(moved), GREY.mix(DISK_ALPHA).filled())))?;

        // points, lines and split lenses are skipped
        let shape = IntersectionShape::of(&sim.reference, moved);
        if let Some(lens) = shape.polygon() {
            chart.draw_series(once(Polygon::new(outline(lens), color.mix(LENS_ALPHA).filled())))?;
        }
    }
    Ok(())
}

fn draw_curves(area: &Panel, sim: &Simulation, n: usize) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(0f64..PI, 0f64..1f64)?;

    chart.draw_series(
        parameter_space(CURVE_TICKS)
            .into_iter()
            .map(|x| PathElement::new(vec![(x, 0.), (x, 1.)], GREY.mix(0.3).stroke_width(1))),
    )?;
    chart.draw_series(once(Rectangle::new([(0., 0.), (PI, 1.)], BLACK.stroke_width(1))))?;

    for (track, color) in tracks(sim) {
        chart.draw_series(LineSeries::new(
            sim.params.iter().copied().zip(track.fractions.iter().copied()),
            color.stroke_width(2),
        ))?;
        chart.draw_series(once(Circle::new(
            (sim.params[n], track.fractions[n]),
            6,
            color.filled(),
        )))?;
    }
    Ok(())
}

fn tracks(sim: &Simulation) -> [(&Track, RGBColor); 2] {
    [(&sim.rotation, BLUE), (&sim.translation, RED)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn sim() -> Simulation {
        Simulation::new(SimulationConfig {
            resolution: 32,
            d_steps: 24,
            ..Default::default()
        })
    }

    fn pixel(r: &FrameRenderer, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * r.width + x) * 3) as usize;
        [r.buffer[i], r.buffer[i + 1], r.buffer[i + 2]]
    }

    #[test_log::test]
    fn frame_is_drawn() {
        let sim = sim();
        let mut renderer = FrameRenderer::new(&sim, 320, 240);
        renderer.draw_frame(0).unwrap();
        assert_eq!(renderer.frame().len(), 320 * 240 * 3);
        assert!(renderer.frame().iter().any(|&b| b != 255));
        // corner is outside both charts
        assert_eq!(pixel(&renderer, 0, 0), [255, 255, 255]);
    }

    #[test_log::test]
    fn frames_do_not_carry_over() {
        let sim = sim();
        let mut fresh = FrameRenderer::new(&sim, 320, 240);
        fresh.draw_frame(11).unwrap();

        let mut reused = FrameRenderer::new(&sim, 320, 240);
        reused.draw_frame(3).unwrap();
        reused.draw_frame(17).unwrap();
        reused.draw_frame(11).unwrap();

        assert!(fresh.frame() == reused.frame());
    }

    #[test_log::test]
    fn frames_differ_between_samples() {
        let sim = sim();
        let mut renderer = FrameRenderer::new(&sim, 320, 240);
        renderer.draw_frame(0).unwrap();
        let first = renderer.frame().to_vec();
        renderer.draw_frame(12).unwrap();
        assert!(first != renderer.frame());
    }

    #[test_log::test]
    fn out_of_range_frame_is_an_error() {
        let sim = sim();
        let mut renderer = FrameRenderer::new(&sim, 320, 240);
        assert!(renderer.draw_frame(sim.len()).is_err());
    }
}
