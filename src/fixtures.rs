/// Mock fixture data for testing and development
///
/// Deterministic scoreboard data shared by unit tests, the mock client and
/// the benchmarks. The fixture week mixes scheduled, live and finished games.
use crate::model::{Competition, Competitor, Event, EventStatus, GameState, ScoreboardResponse};

/// Build an event from `(team, score)` pairs, given away first the way the
/// table reads. Competitors are stored home first as the API sends them.
pub fn create_event(
    state: &str,
    short_detail: &str,
    away: (&str, &str),
    home: (&str, &str),
) -> Event {
    Event {
        status: EventStatus {
            state: GameState::from(state),
            short_detail: short_detail.to_string(),
        },
        competition: Competition {
            competitors: vec![create_competitor(home), create_competitor(away)],
        },
    }
}

fn create_competitor((team_name, score): (&str, &str)) -> Competitor {
    Competitor {
        team_name: team_name.to_string(),
        score: score.to_string(),
    }
}

/// Create a mock week with games in every state
pub fn create_mock_scoreboard() -> ScoreboardResponse {
    ScoreboardResponse {
        events: vec![
            create_event("post", "Final", ("Pittsburgh Steelers", "31"), ("Cincinnati Bengals", "33")),
            create_event("in", "3rd 8:12", ("Buffalo Bills", "14"), ("New York Jets", "10")),
            create_event("in", "Halftime", ("Los Angeles Rams", "7"), ("Jacksonville Jaguars", "3")),
            create_event("pre", "Sun, October 19th at 1:00 PM EDT", ("Miami Dolphins", ""), ("Cleveland Browns", "")),
            create_event("pre", "Sun, October 19th at 4:25 PM EDT", ("Green Bay Packers", ""), ("Arizona Cardinals", "")),
            create_event("post", "Final/OT", ("Houston Texans", "20"), ("Seattle Seahawks", "23")),
        ],
    }
}

/// Create a larger week for benchmarks
pub fn create_full_week(games: usize) -> ScoreboardResponse {
    let base = create_mock_scoreboard();
    ScoreboardResponse {
        events: base.events.iter().cycle().take(games).cloned().collect(),
    }
}

/// Trimmed ESPN scoreboard payload with the fields the decoder reads plus
/// some it ignores
pub const SCOREBOARD_JSON: &str = r#"{
  "leagues": [{ "abbreviation": "NFL" }],
  "week": { "number": 7 },
  "events": [
    {
      "id": "401772830",
      "name": "Buffalo Bills at New York Jets",
      "status": {
        "clock": 492.0,
        "period": 3,
        "type": { "state": "in", "completed": false, "shortDetail": "8:12 - 3rd" }
      },
      "competitions": [
        {
          "competitors": [
            { "homeAway": "home", "team": { "abbreviation": "NYJ", "displayName": "New York Jets" }, "score": "10" },
            { "homeAway": "away", "team": { "abbreviation": "BUF", "displayName": "Buffalo Bills" }, "score": "14" }
          ]
        }
      ]
    },
    {
      "id": "401772831",
      "status": { "type": { "state": "pre", "completed": false, "shortDetail": "10/19 - 1:00 PM EDT" } },
      "competitions": [
        {
          "competitors": [
            { "homeAway": "home", "team": { "displayName": "Cleveland Browns" } },
            { "homeAway": "away", "team": { "displayName": "Miami Dolphins" } }
          ]
        }
      ]
    },
    {
      "id": "401772832",
      "status": { "type": { "state": "post", "completed": true, "shortDetail": "Final" } },
      "competitions": [
        {
          "competitors": [
            { "homeAway": "home", "team": { "displayName": "Cincinnati Bengals" }, "score": "33" },
            { "homeAway": "away", "team": { "displayName": "Pittsburgh Steelers" }, "score": "31" }
          ]
        }
      ]
    }
  ]
}"#;
