//! Internal minimal plotting module.
//! Provides a matplotlib-like figure/axes/line API with SVG output.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::{Axes, LineId};
pub use data::{Column, IntoPlotData};
pub use element::{Bounds, GridConfig, Legend, LegendEntry, LegendPosition};
pub use error::{PlotError, PlotResult};
pub use figure::{AxesId, Figure};
pub use plot::{Line2D, LineFormat, Plot, PolygonPatch};
pub use scale::{date_to_num, DateScale, LinearScale, LogScale, Scale};
pub use style::{Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, TextStyle};
