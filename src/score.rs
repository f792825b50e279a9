use rocket::serde::{Deserialize, Serialize};

use crate::database::{RequestError, RequestResult};

/// A stored leaderboard record.
/// Within one difficulty tier there is at most one entry per player name.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
    pub difficulty: String,
}

impl ScoreEntry {
    pub fn new(name: String, score: f64, difficulty: String) -> Self {
        Self {
            name,
            score,
            difficulty,
        }
    }
}

/// Raw submission body. Every field is optional so that an incomplete
/// body deserializes fine and gets rejected with a 400 by [`into_entry`],
/// instead of failing in the body parser.
///
/// [`into_entry`]: ScoreSubmission::into_entry
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub name: Option<String>,
    pub score: Option<f64>,
    pub difficulty: Option<String>,
}

impl ScoreSubmission {
    /// Validates the submission and converts it into a [`ScoreEntry`].
    ///
    /// `name` and `difficulty` must be present and non-empty. `score` must be
    /// present and non-zero: a score of exactly `0` counts as missing, which
    /// matches the behavior existing clients depend on.
    pub fn into_entry(self) -> RequestResult<ScoreEntry> {
        let name = self.name.filter(|name| !name.is_empty());
        let difficulty = self.difficulty.filter(|difficulty| !difficulty.is_empty());
        let score = self.score.filter(|&score| score != 0.0);

        match (name, score, difficulty) {
            (Some(name), Some(score), Some(difficulty)) => {
                Ok(ScoreEntry::new(name, score, difficulty))
            }
            _ => Err(RequestError::MissingFields),
        }
    }
}
