use std::path::PathBuf;

/// Radius of rotation.
pub const R: f64 = 5.;
/// Radius of both disks.
pub const DISK_RADIUS: f64 = 2.;
/// Segments per quarter circle used to approximate a disk.
pub const RESOLUTION: usize = 500;
/// Number of samples over the parameter range `[0, π]`.
pub const D_STEPS: usize = 300;

pub const FPS: u32 = 30;
// 6.4x4.8 in at 200 dpi
pub const FRAME_WIDTH: u32 = 1280;
pub const FRAME_HEIGHT: u32 = 960;

pub const VIDEO_PATH: &str = "rotating_circle.mp4";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rotation_radius: f64,
    pub disk_radius: f64,
    pub resolution: usize,
    pub d_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rotation_radius: R,
            disk_radius: DISK_RADIUS,
            resolution: RESOLUTION,
            d_steps: D_STEPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub output: PathBuf,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            fps: FPS,
            output: PathBuf::from(VIDEO_PATH),
        }
    }
}
