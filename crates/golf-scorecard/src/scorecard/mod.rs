mod analyzer;
pub mod chart;
pub mod domain;
pub mod report;

pub use analyzer::{ScoreAnalyzer, ScorecardError, ScorecardRow};
pub use chart::{ChartSeries, ChartSeriesBuilder};
pub use domain::{ParStanding, ShotCategory};
pub use report::views::{CategoryTallyEntry, CourseView, NineSplitEntry, ScorecardSummary};
pub use report::ScorecardReport;
