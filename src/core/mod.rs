pub mod color;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use color::{CssColor, HexColor, parse_css_color, shade_amount, shade_hex};
pub use layout::{BarLayout, ChartGeometry, bar_spacing, layout_bars, max_value};
pub use scale::ValueScale;
pub use types::{BarDatum, Viewport};
