use crate::course::{GolfCourse, Golfer};
use serde::Serialize;

pub const SCORE_SERIES_NAME: &str = "Score";
pub const PAR_SERIES_NAME: &str = "Par";
pub const X_AXIS_TITLE: &str = "Hole";
pub const Y_AXIS_TITLE: &str = "Score";

/// Two line series, golfer score against hole par, ready for a charting front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub score_series: Vec<u32>,
    pub par_series: Vec<u32>,
    pub score_series_name: &'static str,
    pub par_series_name: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
}

pub struct ChartSeriesBuilder;

impl ChartSeriesBuilder {
    /// Labels run `Hole 1..=N` for the header's declared hole count, so a
    /// leniently parsed course with a wrong count shows up on the x axis.
    pub fn build_series(course: &GolfCourse, golfer: &Golfer) -> ChartSeries {
        let labels = (1..=course.hole_count())
            .map(|hole| format!("Hole {hole}"))
            .collect();

        ChartSeries {
            title: format!("{}'s Score vs. Par", golfer.name()),
            labels,
            score_series: golfer.scores().to_vec(),
            par_series: course.holes().iter().map(|hole| hole.par()).collect(),
            score_series_name: SCORE_SERIES_NAME,
            par_series_name: PAR_SERIES_NAME,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: Y_AXIS_TITLE,
        }
    }
}
