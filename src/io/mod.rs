//! IO module - run configuration and snapshot rendering.

mod config;
mod render;

pub use config::{PolicyKind, SamplingMode, SimulationConfig};
pub use render::{render, write_rendering, Palette, RenderOptions, MAX_GRID_CELLS};
