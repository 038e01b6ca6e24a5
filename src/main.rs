use anyhow::Context;
use log::info;

use disk_overlap::{
    config::{SimulationConfig, VideoConfig},
    overlap::Simulation,
    render::FrameRenderer,
    video,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let sim_config = SimulationConfig::default();
    let video_config = VideoConfig::default();
    info!(
        "R = {}, r = {}, {} segments per quarter circle, {} samples",
        sim_config.rotation_radius, sim_config.disk_radius, sim_config.resolution, sim_config.d_steps
    );

    let sim = Simulation::new(sim_config);

    let mut renderer = FrameRenderer::new(&sim, video_config.width, video_config.height);
    video::encode(&mut renderer, &video_config, sim.len())
        .with_context(|| format!("failed to render {}", video_config.output.display()))?;

    info!("done");
    Ok(())
}
