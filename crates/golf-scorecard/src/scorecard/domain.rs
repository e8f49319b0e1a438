use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    Ace,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleOrWorse,
}

impl ShotCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Ace,
            Self::Albatross,
            Self::Eagle,
            Self::Birdie,
            Self::Par,
            Self::Bogey,
            Self::DoubleBogey,
            Self::TripleOrWorse,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Albatross => "Albatross",
            Self::Eagle => "Eagle",
            Self::Birdie => "Birdie",
            Self::Par => "Par",
            Self::Bogey => "Bogey",
            Self::DoubleBogey => "Double Bogey",
            Self::TripleOrWorse => "Triple or Worse",
        }
    }

    /// Categorizes one hole. A score of 1 is always an ace, even on a par 4
    /// where the difference alone would say albatross.
    pub fn classify(score: u32, par: u32) -> Self {
        if score == 1 {
            return Self::Ace;
        }

        match i64::from(score) - i64::from(par) {
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::TripleOrWorse,
        }
    }
}

/// Where a round finished relative to the course par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "standing", content = "strokes")]
pub enum ParStanding {
    UnderPar(u64),
    Even,
    OverPar(u64),
}

impl ParStanding {
    pub fn from_diff(score_to_par: i64) -> Self {
        match score_to_par {
            diff if diff < 0 => Self::UnderPar(diff.unsigned_abs()),
            diff if diff > 0 => Self::OverPar(diff.unsigned_abs()),
            _ => Self::Even,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::UnderPar(strokes) => format!("-{strokes} under par"),
            Self::OverPar(strokes) => format!("+{strokes} over par"),
            Self::Even => "Even par".to_string(),
        }
    }
}
