pub mod config;
pub mod data;
pub mod motion;
pub mod overlap;
pub mod render;
pub mod video;
pub mod vis;
