pub mod analyzer;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod renderer;

pub use crate::analyzer::{load_log, load_log_with, rank_total_views, rank_unique_views, LoadOptions};
pub use crate::error::{PageViewsError, Result};
pub use crate::model::{LoadStats, PathCount, PathVisitLog, RankedMetric};
pub use crate::renderer::{format_report, render_reports};
