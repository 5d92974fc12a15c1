pub mod container;
pub mod dimensions;
pub mod kind;
pub mod types;

pub use container::Container;
pub use dimensions::{DimensionBounds, DimensionPolicy, SizingRule};
pub use kind::ChartKind;
pub use types::{ContentBox, RenderDimensions};
