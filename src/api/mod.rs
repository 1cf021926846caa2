mod animation;
mod axis_scene_builder;
mod chart_style;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod extrusion_scene_builder;
mod interaction_controller;
mod lifecycle_controller;
mod render_frame_builder;
mod tooltip_scene_builder;

pub use animation::{
    AnimationConfig, AnimationDriver, AnimationMode, AnimationPhase, FrameOutcome, FrameTicket,
};
pub use axis_scene_builder::{YAxisTick, y_axis_ticks};
pub use chart_style::{ChartStyle, ExtrusionStyle, ResolvedPalette, TooltipStyle};
pub use engine::BarChart3D;
pub use engine_config::ChartConfig;
pub use engine_snapshot::ChartSnapshot;
pub use extrusion_scene_builder::{BarFaceColors, resolve_face_colors};
