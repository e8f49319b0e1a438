use super::{CourseDefect, RecordDefect};
use serde::{Deserialize, Serialize};

/// Holes played on the front side of a regulation course.
pub const NINE: usize = 9;

/// Highest par accepted for a single hole.
pub const MAX_HOLE_PAR: u32 = 20;

/// Highest hole count a course header may declare. Chart labels are generated
/// per declared hole, so this also bounds the chart size.
pub const MAX_HOLES: u32 = 144;

/// One playable hole as declared by an `H` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HoleFields")]
pub struct Hole {
    number: u32,
    name: String,
    par: u32,
}

impl Hole {
    /// Requires `number >= 1`, `1 <= par <= MAX_HOLE_PAR` and a non-blank name
    /// that can be written back as a single field.
    pub fn new(number: u32, name: impl Into<String>, par: u32) -> Result<Self, RecordDefect> {
        let name = name.into();
        bounded("number", number, u32::MAX)?;
        if name.trim().is_empty() {
            return Err(RecordDefect::Empty { field: "name" });
        }
        single_field("name", &name)?;
        bounded("par", par, MAX_HOLE_PAR)?;

        Ok(Self { number, name, par })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn par(&self) -> u32 {
        self.par
    }
}

#[derive(Deserialize)]
struct HoleFields {
    number: u32,
    name: String,
    par: u32,
}

impl TryFrom<HoleFields> for Hole {
    type Error = RecordDefect;

    fn try_from(fields: HoleFields) -> Result<Self, Self::Error> {
        Hole::new(fields.number, fields.name, fields.par)
    }
}

/// A parsed course: header metadata plus holes in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseFields")]
pub struct GolfCourse {
    name: String,
    hole_count: u32,
    par: u32,
    holes: Vec<Hole>,
}

impl GolfCourse {
    /// Fails when the header values would be rejected by the parser or when
    /// `holes` is empty. The declared `hole_count` may differ from `holes.len()`.
    pub fn new(
        name: impl Into<String>,
        hole_count: u32,
        par: u32,
        holes: Vec<Hole>,
    ) -> Result<Self, CourseDefect> {
        let name = name.into();
        check_header(&name, par, hole_count)?;
        if holes.is_empty() {
            return Err(CourseDefect::NoHoles);
        }

        Ok(Self {
            name,
            hole_count,
            par,
            holes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hole count declared in the header, which may differ from `holes().len()`
    /// when the course was parsed leniently.
    pub fn hole_count(&self) -> u32 {
        self.hole_count
    }

    /// Declared total par.
    pub fn par(&self) -> u32 {
        self.par
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Sum of the individual hole pars. Not checked against [`Self::par`].
    pub fn hole_par_total(&self) -> u64 {
        self.holes.iter().map(|hole| u64::from(hole.par)).sum()
    }

    pub fn front_nine(&self) -> &[Hole] {
        &self.holes[..self.holes.len().min(NINE)]
    }

    pub fn back_nine(&self) -> &[Hole] {
        &self.holes[self.holes.len().min(NINE)..]
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} ({} holes, par {})",
            self.name, self.hole_count, self.par
        )
    }

    /// Entry label for the hole at `index`, e.g. `Hole 3 - O'Man (Par 3)`.
    pub fn score_prompt(&self, index: usize) -> Option<String> {
        self.holes
            .get(index)
            .map(|hole| format!("Hole {} - {} (Par {})", index + 1, hole.name, hole.par))
    }
}

#[derive(Deserialize)]
struct CourseFields {
    name: String,
    hole_count: u32,
    par: u32,
    holes: Vec<Hole>,
}

impl TryFrom<CourseFields> for GolfCourse {
    type Error = CourseDefect;

    fn try_from(fields: CourseFields) -> Result<Self, Self::Error> {
        GolfCourse::new(fields.name, fields.hole_count, fields.par, fields.holes)
    }
}

/// Header rules shared by the parser and [`GolfCourse::new`]. The course name
/// may be blank but must fit in one field.
pub(crate) fn check_header(name: &str, par: u32, hole_count: u32) -> Result<(), RecordDefect> {
    single_field("name", name)?;
    bounded("par", par, u32::MAX)?;
    bounded("hole_count", hole_count, MAX_HOLES)?;
    Ok(())
}

fn bounded(field: &'static str, value: u32, max: u32) -> Result<(), RecordDefect> {
    if value < 1 {
        return Err(RecordDefect::NotPositive {
            field,
            value: i64::from(value),
        });
    }
    if value > max {
        return Err(RecordDefect::OutOfRange {
            field,
            value: i64::from(value),
        });
    }
    Ok(())
}

fn single_field(field: &'static str, value: &str) -> Result<(), RecordDefect> {
    if value.contains([',', '\n', '\r']) {
        return Err(RecordDefect::Separator { field });
    }
    Ok(())
}

/// A player's card: one score per hole, aligned by index with the course holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Golfer {
    name: String,
    scores: Vec<u32>,
}

impl Golfer {
    /// Every stroke count must be at least one. Alignment with a course is not
    /// checked here; see [`Self::check_alignment`].
    pub fn new(name: impl Into<String>, scores: Vec<u32>) -> Result<Self, GolferError> {
        if let Some(index) = scores.iter().position(|&score| score == 0) {
            return Err(GolferError::ZeroScore { hole: index + 1 });
        }

        Ok(Self {
            name: name.into(),
            scores,
        })
    }

    /// A card with every hole scored at its par.
    pub fn at_par(name: impl Into<String>, course: &GolfCourse) -> Self {
        Self {
            name: name.into(),
            scores: course.holes.iter().map(Hole::par).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn check_alignment(&self, course: &GolfCourse) -> Result<(), GolferError> {
        let holes = course.holes.len();
        if self.scores.len() < holes {
            return Err(GolferError::MissingScores {
                holes,
                scores: self.scores.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GolferError {
    #[error("score for hole {hole} must be at least 1")]
    ZeroScore { hole: usize },
    #[error("course has {holes} holes but only {scores} scores were entered")]
    MissingScores { holes: usize, scores: usize },
}
