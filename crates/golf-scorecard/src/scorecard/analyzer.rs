use super::domain::{ParStanding, ShotCategory};
use crate::course::{GolfCourse, Golfer, Hole};
use serde::Serialize;

/// One line of the scorecard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorecardRow {
    /// 1-based position on the card.
    pub hole: usize,
    /// Hole number as declared in the course file.
    pub number: u32,
    pub name: String,
    pub par: u32,
    pub score: u32,
    pub category: ShotCategory,
    pub category_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScorecardError {
    #[error("{golfer} has {scores} scores for a course with {holes} holes")]
    Misaligned {
        golfer: String,
        holes: usize,
        scores: usize,
    },
}

pub struct ScoreAnalyzer;

impl ScoreAnalyzer {
    pub fn classify(score: u32, par: u32) -> ShotCategory {
        ShotCategory::classify(score, par)
    }

    pub fn total_score(golfer: &Golfer) -> u64 {
        golfer.scores().iter().map(|&score| u64::from(score)).sum()
    }

    pub fn score_to_par(total_score: u64, course_par: u64) -> i64 {
        total_score as i64 - course_par as i64
    }

    pub fn standing(golfer: &Golfer, course: &GolfCourse) -> ParStanding {
        ParStanding::from_diff(Self::score_to_par(
            Self::total_score(golfer),
            u64::from(course.par()),
        ))
    }

    /// Pairs each hole with the score at the same index. Scores past the last
    /// hole are ignored.
    pub fn scorecard(
        course: &GolfCourse,
        golfer: &Golfer,
    ) -> Result<Vec<ScorecardRow>, ScorecardError> {
        let holes = course.holes();
        let scores = golfer.scores();
        if scores.len() < holes.len() {
            return Err(ScorecardError::Misaligned {
                golfer: golfer.name().to_string(),
                holes: holes.len(),
                scores: scores.len(),
            });
        }

        Ok(holes
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(index, (hole, &score))| row(index, hole, score))
            .collect())
    }
}

fn row(index: usize, hole: &Hole, score: u32) -> ScorecardRow {
    let category = ShotCategory::classify(score, hole.par());
    ScorecardRow {
        hole: index + 1,
        number: hole.number(),
        name: hole.name().to_string(),
        par: hole.par(),
        score,
        category,
        category_label: category.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_course() -> GolfCourse {
        "C,Test,4,1\nH,1,One,4".parse().expect("course parses")
    }

    #[test]
    fn par_round_is_even() {
        let course = test_course();
        let golfer = Golfer::new("Sam", vec![4]).expect("valid golfer");

        let rows = ScoreAnalyzer::scorecard(&course, &golfer).expect("aligned");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            (rows[0].hole, rows[0].par, rows[0].score, rows[0].category_label),
            (1, 4, 4, "Par")
        );

        let total = ScoreAnalyzer::total_score(&golfer);
        assert_eq!(total, 4);
        assert_eq!(ScoreAnalyzer::score_to_par(total, u64::from(course.par())), 0);
        assert_eq!(ScoreAnalyzer::standing(&golfer, &course).label(), "Even par");
    }

    #[test]
    fn six_and_seven_on_a_par_four() {
        let course = test_course();
        let six = Golfer::new("Six", vec![6]).expect("valid golfer");
        let seven = Golfer::new("Seven", vec![7]).expect("valid golfer");

        let rows = ScoreAnalyzer::scorecard(&course, &six).expect("aligned");
        assert_eq!(rows[0].category, ShotCategory::DoubleBogey);
        let rows = ScoreAnalyzer::scorecard(&course, &seven).expect("aligned");
        assert_eq!(rows[0].category, ShotCategory::TripleOrWorse);
    }

    #[test]
    fn score_to_par_is_signed_difference() {
        assert_eq!(ScoreAnalyzer::score_to_par(68, 72), -4);
        assert_eq!(ScoreAnalyzer::score_to_par(75, 72), 3);
    }

    #[test]
    fn extra_scores_are_ignored() {
        let course = test_course();
        let golfer = Golfer::new("Sam", vec![3, 9, 9]).expect("valid golfer");
        let rows = ScoreAnalyzer::scorecard(&course, &golfer).expect("aligned");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, ShotCategory::Birdie);
    }

    #[test]
    fn missing_scores_are_misaligned() {
        let course: GolfCourse = "C,Two,7,2\nH,1,One,4\nH,2,Two,3"
            .parse()
            .expect("course parses");
        let golfer = Golfer::new("Sam", vec![4]).expect("valid golfer");
        let error = ScoreAnalyzer::scorecard(&course, &golfer).expect_err("misaligned");
        assert_eq!(
            error,
            ScorecardError::Misaligned {
                golfer: "Sam".to_string(),
                holes: 2,
                scores: 1
            }
        );
    }

    #[test]
    fn rows_keep_declared_numbers_and_card_positions() {
        let course: GolfCourse = "C,Odd,7,2\nH,10,Ten,4\nH,11,Eleven,3"
            .parse()
            .expect("course parses");
        let golfer = Golfer::at_par("Sam", &course);
        let rows = ScoreAnalyzer::scorecard(&course, &golfer).expect("aligned");
        assert_eq!(rows[1].hole, 2);
        assert_eq!(rows[1].number, 11);
        assert_eq!(rows[1].name, "Eleven");
    }
}
