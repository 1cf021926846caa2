//! bar3d-chart: pseudo-3D bar chart widget.
//!
//! Bars are drawn as fixed-angle extrusions (front, top and side faces),
//! grow in with an entrance animation and show a value tooltip on hover once
//! settled. Scene building is backend-agnostic; Cairo and GTK4 integrations
//! are opt-in features.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChart3D, ChartConfig};
pub use error::{ChartError, ChartResult};
