// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; axis, plot series and canvas over an abstract scene.

pub mod error;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod style;
pub mod marker;
pub mod scene;
pub mod axis;
pub mod plot;
pub mod canvas;
pub mod types;

pub use error::{PlotError, Result};
pub use geometry::{Point, Size, ViewRect};
pub use scale::{Scale, Transform};
pub use theme::{Color, Theme};
pub use style::{style_for, DashPattern, Pen, PlotStyle, RenderStyle};
pub use marker::MarkerType;
pub use scene::{MemoryScene, MonospaceMetrics, Primitive, PrimitiveId, Scene, Shape, TextExtent, TextItem, TextMetrics};
pub use axis::{Axis, AxisOptions, TickSpacing};
pub use plot::{Plot, PointRecord};
pub use canvas::{PlotCanvas, PlotId, PlotMut};
