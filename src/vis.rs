use plotly::{
    color::NamedColor,
    common::{HoverInfo, Line, Marker, Mode, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};

use crate::overlap::{parameter_space, Simulation, Track};

fn curve(sim: &Simulation, track: &Track, color: NamedColor) -> Box<Scatter<f64, f64>> {
    Scatter::new(sim.params.clone(), track.fractions.clone())
        .mode(Mode::Lines)
        .name(track.motion.name())
        .line(Line::new().color(color).width(2.))
}

fn peak(sim: &Simulation, track: &Track, color: NamedColor) -> Option<Box<Scatter<f64, f64>>> {
    let (n, f) = track.peak()?;
    Some(
        Scatter::new(vec![sim.params[n]], vec![f])
            .mode(Mode::Markers)
            .show_legend(false)
            .marker(Marker::new().color(color).size(10))
            .hover_text_array(vec![format!("{} peak, sample {n}: {f:.4}", track.motion.name())])
            .hover_info(HoverInfo::Text),
    )
}

/// Overlap-fraction curves of both motions over `[0, π]`.
pub fn overlap_plot(sim: &Simulation) -> Plot {
    let mut plot = Plot::new();
    for (track, color) in [
        (&sim.rotation, NamedColor::Blue),
        (&sim.translation, NamedColor::Red),
    ] {
        plot.add_trace(curve(sim, track, color));
        if let Some(marker) = peak(sim, track, color) {
            plot.add_trace(marker);
        }
    }

    plot.set_layout(
        Layout::new()
            .title(Title::new("Overlap with the reference disk"))
            .x_axis(
                Axis::new()
                    .title(Title::new("d [rad]"))
                    .range(vec![0., std::f64::consts::PI])
                    .tick_values(parameter_space(8))
                    .zero_line(false),
            )
            .y_axis(
                Axis::new()
                    .title(Title::new("overlap fraction"))
                    .range(vec![0., 1.]),
            ),
    );
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn sim() -> Simulation {
        Simulation::new(SimulationConfig {
            resolution: 16,
            d_steps: 20,
            ..Default::default()
        })
    }

    #[test_log::test]
    fn plot_has_a_curve_and_a_peak_per_motion() {
        let json = overlap_plot(&sim()).to_json();
        assert!(json.contains("\"rotation\""));
        assert!(json.contains("\"translation\""));
        assert_eq!(json.matches("\"markers\"").count(), 2);
    }

    #[test_log::test]
    fn plot_renders_to_html() {
        let html = overlap_plot(&sim()).to_html();
        assert!(html.contains("<html"));
        assert!(html.contains("translation"));
    }
}
