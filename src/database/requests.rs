use rocket::serde::{Deserialize, Serialize};

use crate::score::{ScoreEntry, ScoreSubmission};

use super::*;

/// Maximum number of entries returned for a single difficulty tier.
const LEADERBOARD_LIMIT: usize = 10;

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct StatusMessage {
    pub message: String,
}

/// Quotes a string value for interpolation into a query,
/// doubling any single quotes it contains.
fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Fetches the top scores for one difficulty tier, highest first.
/// An unknown tier yields an empty array, not an error.
/// Ties are broken by name ascending so the order is deterministic.
#[get("/leaderboard/<difficulty>", format = "json")]
pub async fn get_leaderboard(
    difficulty: &str,
    db: &State<Db>,
) -> RequestResult<Json<Vec<ScoreEntry>>> {
    let pool = db.pool()?;

    // Fetch scores
    let response = sqlx::query(&format!(
        "SELECT name, score, difficulty FROM leaderboard WHERE difficulty = {} ORDER BY score DESC, name ASC LIMIT {}",
        quoted(difficulty),
        LEADERBOARD_LIMIT,
    ))
    .fetch_all(pool)
    .await?;

    // Translate rows
    let scores = response
        .into_iter()
        .map(|row| {
            let name = row.get_unchecked::<String, usize>(0);
            let score = row.get_unchecked::<f64, usize>(1);
            let difficulty = row.get_unchecked::<String, usize>(2);
            ScoreEntry::new(name, score, difficulty)
        })
        .collect();

    Ok(Json(scores))
}

/// Records a submitted score. A new (name, difficulty) pair is inserted;
/// an existing one is updated only when the new score is strictly higher.
/// The response does not distinguish insert, update, and no-op.
#[post("/leaderboard", format = "json", data = "<submission>")]
pub async fn submit_score(
    submission: Json<ScoreSubmission>,
    db: &State<Db>,
) -> RequestResult<Json<StatusMessage>> {
    let entry = submission.0.into_entry()?;
    let pool = db.pool()?;

    // Look up the stored score for this (name, difficulty) pair
    let existing = sqlx::query(&format!(
        "SELECT score FROM leaderboard WHERE name = {} AND difficulty = {}",
        quoted(&entry.name),
        quoted(&entry.difficulty),
    ))
    .fetch_optional(pool)
    .await?;

    match existing {
        Some(row) => {
            let stored = row.get_unchecked::<f64, usize>(0);
            if entry.score > stored {
                sqlx::query(&format!(
                    "UPDATE leaderboard SET score = {} WHERE name = {} AND difficulty = {}",
                    entry.score,
                    quoted(&entry.name),
                    quoted(&entry.difficulty),
                ))
                .execute(pool)
                .await?;
            }
        }
        None => {
            sqlx::query(&format!(
                "INSERT INTO leaderboard (name, score, difficulty) VALUES ({}, {}, {})",
                quoted(&entry.name),
                entry.score,
                quoted(&entry.difficulty),
            ))
            .execute(pool)
            .await?;
        }
    }

    Ok(Json(StatusMessage {
        message: "Score updated".to_owned(),
    }))
}
