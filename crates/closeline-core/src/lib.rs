// File: crates/closeline-core/src/lib.rs
// Summary: Core library entry point; exports the quote pipeline and chart API.

pub mod app;
pub mod attrs;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod overlay;
pub mod quote;
pub mod quotes;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod window;

pub use app::{ChartView, PriceChartApp};
pub use attrs::{area_gradient, point_radii, GradientStop, LinearGradient, LAST_POINT_RADIUS};
pub use chart::{ChartOptions, Dataset, Frame, Layout, LineChart, RenderContext};
pub use dataset::ChartDataset;
pub use error::QuoteError;
pub use geometry::Rect;
pub use label::label_for;
pub use overlay::{CrosshairOverlay, DrawHook};
pub use quote::{Period, QuoteRecord};
pub use quotes::{load_quotes_csv, EodHttpSource, QuoteSource, StaticSource};
pub use scale::{IndexScale, ValueScale};
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
pub use theme::Theme;
pub use tooltip::{
    average_position, ActivePoint, TooltipAnchor, TooltipPositioner, TopAnchorPositioner, XAlign,
    YAlign,
};
pub use types::{Insets, Rgba, HEIGHT, WIDTH};
pub use window::{select, DAILY_WINDOW};
