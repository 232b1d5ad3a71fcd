// File: crates/plotline-core/src/lib.rs
// Summary: Core library entry point; scales, animation, extrema, ticks, plot layout and hit testing.

pub mod types;
pub mod geometry;
pub mod error;
pub mod domain;
pub mod scale;
pub mod timing;
pub mod animator;
pub mod point;
pub mod extrema;
pub mod canvas;
pub mod theme;
pub mod ticks;
pub mod tick;
pub mod node;
pub mod axis;
pub mod plot;
pub mod chart;

pub use types::{Color, Insets, Length};
pub use geometry::{Point2, Rect};
pub use error::{ChartError, Result};
pub use domain::{Domain, Range, ScaleKey, ScaleValue};
pub use scale::ContinuousScale;
pub use timing::{Easing, Millis, Timing, Transition, Tween};
pub use animator::{AnimatorPhase, ScaleAnimator, ScaleObserver, SharedScale};
pub use point::{DataPoint, LabelPlacement, PointCategory};
pub use extrema::DataExtrema;
pub use canvas::{Brush, Canvas, DrawCall, LinearGradient, Path, PathVerb, RecordingCanvas, TextAlign, TextBaseline, TextStyle};
pub use theme::Theme;
pub use ticks::{EvenTickGenerator, NumericTickGenerator, TickGenerator, TickValue, TimeTickGenerator};
pub use tick::{Tick, TickState};
pub use node::ChartNode;
pub use axis::{Axis, AxisStyle, Orientation, TickGeneratorSetting};
pub use plot::{LayoutStatus, Plot, PlotGeometry, PlotObserver, PlotStyle, PlotType};
pub use chart::{Chart, ChartHit, ChartOptions};
