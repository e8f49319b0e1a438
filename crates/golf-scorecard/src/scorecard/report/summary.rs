use super::super::analyzer::{ScoreAnalyzer, ScorecardError, ScorecardRow};
use super::super::chart::{ChartSeries, ChartSeriesBuilder};
use super::super::domain::{ParStanding, ShotCategory};
use super::views::{CategoryTallyEntry, NineSplitEntry, ScorecardSummary};
use crate::course::domain::NINE;
use crate::course::{GolfCourse, Golfer};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NineTotals {
    pub label: &'static str,
    pub holes: usize,
    pub score: u64,
    pub par: u64,
}

impl NineTotals {
    fn from_rows(label: &'static str, rows: &[ScorecardRow]) -> Self {
        Self {
            label,
            holes: rows.len(),
            score: rows.iter().map(|row| u64::from(row.score)).sum(),
            par: rows.iter().map(|row| u64::from(row.par)).sum(),
        }
    }

    pub fn score_to_par(&self) -> i64 {
        ScoreAnalyzer::score_to_par(self.score, self.par)
    }

    fn to_view(&self) -> NineSplitEntry {
        NineSplitEntry {
            label: self.label,
            holes: self.holes,
            score: self.score,
            par: self.par,
            score_to_par: self.score_to_par(),
        }
    }
}

/// Everything a front end needs to show one golfer's round on one course.
#[derive(Debug)]
pub struct ScorecardReport {
    pub course: String,
    pub course_par: u32,
    pub golfer: String,
    pub rows: Vec<ScorecardRow>,
    pub total_score: u64,
    pub score_to_par: i64,
    pub category_tally: HashMap<ShotCategory, usize>,
    /// Front and back nine. Empty for courses of nine holes or fewer.
    pub nines: Vec<NineTotals>,
    pub chart: ChartSeries,
}

impl ScorecardReport {
    pub fn build(course: &GolfCourse, golfer: &Golfer) -> Result<Self, ScorecardError> {
        let rows = ScoreAnalyzer::scorecard(course, golfer)?;
        let total_score = ScoreAnalyzer::total_score(golfer);
        let score_to_par = ScoreAnalyzer::score_to_par(total_score, u64::from(course.par()));

        let mut category_tally: HashMap<ShotCategory, usize> = HashMap::new();
        for row in &rows {
            *category_tally.entry(row.category).or_default() += 1;
        }

        let nines = if rows.len() > NINE {
            let (front, back) = rows.split_at(NINE);
            vec![
                NineTotals::from_rows("Front Nine", front),
                NineTotals::from_rows("Back Nine", back),
            ]
        } else {
            Vec::new()
        };

        Ok(Self {
            course: course.name().to_string(),
            course_par: course.par(),
            golfer: golfer.name().to_string(),
            rows,
            total_score,
            score_to_par,
            category_tally,
            nines,
            chart: ChartSeriesBuilder::build_series(course, golfer),
        })
    }

    pub fn standing(&self) -> ParStanding {
        ParStanding::from_diff(self.score_to_par)
    }

    pub fn summary(&self) -> ScorecardSummary {
        let category_tally = ShotCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.category_tally
                    .get(&category)
                    .map(|&holes| CategoryTallyEntry {
                        category,
                        category_label: category.label(),
                        holes,
                    })
            })
            .collect();

        let standing = self.standing();

        ScorecardSummary {
            course: self.course.clone(),
            course_par: self.course_par,
            golfer: self.golfer.clone(),
            total_score: self.total_score,
            score_to_par: self.score_to_par,
            standing,
            standing_label: standing.label(),
            rows: self.rows.clone(),
            category_tally,
            nines: self.nines.iter().map(NineTotals::to_view).collect(),
            chart: self.chart.clone(),
        }
    }
}
