use super::super::analyzer::ScorecardRow;
use super::super::chart::ChartSeries;
use super::super::domain::{ParStanding, ShotCategory};
use crate::course::{GolfCourse, Hole};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CourseView {
    pub name: String,
    pub hole_count: u32,
    pub par: u32,
    pub hole_par_total: u64,
    pub summary: String,
    pub holes: Vec<Hole>,
}

impl From<&GolfCourse> for CourseView {
    fn from(course: &GolfCourse) -> Self {
        Self {
            name: course.name().to_string(),
            hole_count: course.hole_count(),
            par: course.par(),
            hole_par_total: course.hole_par_total(),
            summary: course.summary_line(),
            holes: course.holes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTallyEntry {
    pub category: ShotCategory,
    pub category_label: &'static str,
    pub holes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NineSplitEntry {
    pub label: &'static str,
    pub holes: usize,
    pub score: u64,
    pub par: u64,
    pub score_to_par: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardSummary {
    pub course: String,
    pub course_par: u32,
    pub golfer: String,
    pub total_score: u64,
    pub score_to_par: i64,
    pub standing: ParStanding,
    pub standing_label: String,
    pub rows: Vec<ScorecardRow>,
    pub category_tally: Vec<CategoryTallyEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nines: Vec<NineSplitEntry>,
    pub chart: ChartSeries,
}
