/// Score transformer: decoded scoreboard in, display-ready rows out
use tracing::debug;

use crate::error::{Result, ScoreboardError};
use crate::model::{Event, GameState, ScoreboardResponse};

/// Prefix of the status string for live games; also drives row highlighting
pub const IN_PROGRESS_PREFIX: &str = "In Progress";

/// Status shown for any game that is neither scheduled nor live
const FINAL_STATUS: &str = "Final";

/// Score placeholder for games that have not started
const SCHEDULED_SCORE: &str = "vs";

/// One table row, built once per event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub status: String,
    pub away_team: String,
    pub home_team: String,
    pub score: String,
    pub in_progress: bool,
}

/// Map every event to a `GameRow`, preserving order.
///
/// Fails on the first event whose competition lists fewer than two
/// competitors; no partial result is returned.
pub fn transform(response: &ScoreboardResponse) -> Result<Vec<GameRow>> {
    let rows = response
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| game_row(index, event))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Transformed {} events ({} in progress)",
        rows.len(),
        rows.iter().filter(|row| row.in_progress).count()
    );
    Ok(rows)
}

fn game_row(index: usize, event: &Event) -> Result<GameRow> {
    let competition = &event.competition;
    let (home, away) = match (competition.home(), competition.away()) {
        (Some(home), Some(away)) => (home, away),
        _ => {
            return Err(ScoreboardError::MalformedEvent {
                index,
                competitors: competition.competitors.len(),
            })
        }
    };

    let status = game_status(event);
    let score = if event.status.state.is_scheduled() {
        SCHEDULED_SCORE.to_string()
    } else {
        format!("{} - {}", away.score, home.score)
    };
    let in_progress = status.starts_with(IN_PROGRESS_PREFIX);

    Ok(GameRow {
        status,
        away_team: away.team_name.clone(),
        home_team: home.team_name.clone(),
        score,
        in_progress,
    })
}

fn game_status(event: &Event) -> String {
    match event.status.state {
        GameState::Pre => event.status.short_detail.clone(),
        GameState::In => format!("{} - {}", IN_PROGRESS_PREFIX, event.status.short_detail),
        GameState::Final => FINAL_STATUS.to_string(),
    }
}
