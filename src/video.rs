use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info, warn};

use crate::config::VideoConfig;
use crate::render::FrameRenderer;

/// Consumer of raw RGB24 frames.
pub trait FrameSink {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<()>;
}

pub fn ffmpeg_args(config: &VideoConfig) -> Vec<String> {
    let mut args: Vec<String> = [
        "-hide_banner",
        "-loglevel",
        "error",
        "-nostats",
        "-y",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgb24",
        "-s",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.push(format!("{}x{}", config.width, config.height));
    args.extend(["-r".to_string(), config.fps.to_string()]);
    args.extend(
        ["-i", "pipe:0", "-an", "-pix_fmt", "yuv420p"]
            .iter()
            .map(|s| s.to_string()),
    );
    args.push(config.output.display().to_string());
    args
}

/// `ffmpeg` child process fed with frames through its stdin.
pub struct FfmpegEncoder {
    child: Child,
    stdin: Option<ChildStdin>,
    frame_len: usize,
    frames: usize,
}

impl FfmpegEncoder {
    pub fn spawn(config: &VideoConfig) -> Result<Self> {
        let mut cmd = Command::new("ffmpeg");
        cmd.args(ffmpeg_args(config));
        Self::from_command(cmd, (config.width * config.height * 3) as usize)
            .context("failed to spawn ffmpeg (is it installed and on PATH?)")
    }

    fn from_command(mut cmd: Command, frame_len: usize) -> Result<Self> {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("ffmpeg stdin unavailable"))?;
        Ok(Self {
            child,
            stdin: Some(stdin),
            frame_len,
            frames: 0,
        })
    }

    /// Closes the pipe and waits for ffmpeg; returns the number of frames written.
    pub fn finish(mut self) -> Result<usize> {
        drop(self.stdin.take());
        let status = self.child.wait().context("failed to wait for ffmpeg")?;
        if !status.success() {
            bail!("ffmpeg exited with {}", status);
        }
        Ok(self.frames)
    }
}

impl Drop for FfmpegEncoder {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            let _ = self.child.wait();
        }
    }
}

impl FrameSink for FfmpegEncoder {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<()> {
        if rgb.len() != self.frame_len {
            bail!("frame is {} bytes, expected {}", rgb.len(), self.frame_len);
        }
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| anyhow!("ffmpeg stdin already closed"))?;
        stdin
            .write_all(rgb)
            .with_context(|| format!("failed to write frame {} to ffmpeg", self.frames))?;
        self.frames += 1;
        Ok(())
    }
}

/// Draws every frame in sample order and hands it to `sink`.
pub fn assemble<S: FrameSink>(renderer: &mut FrameRenderer, sink: &mut S, frames: usize) -> Result<()> {
    for n in 0..frames {
        renderer.draw_frame(n)?;
        sink.write_frame(renderer.frame())?;
        debug!("frame {}/{}", n + 1, frames);
    }
    Ok(())
}

pub fn encode(renderer: &mut FrameRenderer, config: &VideoConfig, frames: usize) -> Result<()> {
    let (width, height) = renderer.dimensions();
    if (width, height) != (config.width, config.height) {
        bail!(
            "renderer draws {}x{} frames but the video is {}x{}",
            width,
            height,
            config.width,
            config.height
        );
    }
    info!(
        "encoding {} frames at {} fps to {}",
        frames,
        config.fps,
        config.output.display()
    );
    let encoder = FfmpegEncoder::spawn(config)?;
    match drive(encoder, renderer, frames) {
        Ok(written) => {
            info!("wrote {} ({} frames)", config.output.display(), written);
            Ok(())
        }
        Err(e) => {
            if std::fs::remove_file(&config.output).is_ok() {
                warn!("removed partial {}", config.output.display());
            }
            Err(e)
        }
    }
}

/// Runs `assemble` and always closes the encoder, also when a frame fails.
fn drive(mut encoder: FfmpegEncoder, renderer: &mut FrameRenderer, frames: usize) -> Result<usize> {
    let assembled = assemble(renderer, &mut encoder, frames);
    let finished = encoder.finish();
    assembled?;
    finished
}
