pub mod band_scale;
pub mod layout;
pub mod types;
pub mod value_scale;

pub use band_scale::BandScale;
pub use layout::{ChartLayout, LayoutInput};
pub use types::{ChartDatum, Margins, Viewport, total_value, validate_data};
pub use value_scale::ValueScale;
