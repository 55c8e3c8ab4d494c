/// Serde mirror of the ESPN scoreboard JSON
///
/// Only the fields the table needs are declared. Everything defaults, so a
/// missing key decodes to an empty value instead of failing the whole week.
use serde::Deserialize;
use tracing::debug;

use crate::model::{Competition, Competitor, Event, EventStatus, GameState, ScoreboardResponse};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreboardPayload {
    pub events: Vec<EventPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub status: StatusPayload,
    pub competitions: Vec<CompetitionPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusPayload {
    #[serde(rename = "type")]
    pub kind: StatusTypePayload,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusTypePayload {
    pub state: String,
    pub short_detail: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompetitionPayload {
    pub competitors: Vec<CompetitorPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompetitorPayload {
    pub team: TeamPayload,
    pub score: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamPayload {
    pub display_name: String,
}

impl From<ScoreboardPayload> for ScoreboardResponse {
    fn from(payload: ScoreboardPayload) -> Self {
        ScoreboardResponse {
            events: payload.events.into_iter().map(Event::from).collect(),
        }
    }
}

impl From<EventPayload> for Event {
    fn from(payload: EventPayload) -> Self {
        if payload.competitions.len() > 1 {
            debug!(
                "Event lists {} competitions, keeping the first",
                payload.competitions.len()
            );
        }

        let competition = payload
            .competitions
            .into_iter()
            .next()
            .map(Competition::from)
            .unwrap_or_default();

        Event {
            status: EventStatus {
                state: GameState::from(payload.status.kind.state.as_str()),
                short_detail: payload.status.kind.short_detail,
            },
            competition,
        }
    }
}

impl From<CompetitionPayload> for Competition {
    fn from(payload: CompetitionPayload) -> Self {
        Competition {
            competitors: payload
                .competitors
                .into_iter()
                .map(|c| Competitor {
                    team_name: c.team.display_name,
                    score: c.score,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SCOREBOARD_JSON;

    #[test]
    fn test_decode_fixture() {
        let payload: ScoreboardPayload = serde_json::from_str(SCOREBOARD_JSON).unwrap();
        assert_eq!(payload.events.len(), 3);
        assert_eq!(payload.events[0].status.kind.state, "in");
        assert_eq!(payload.events[0].status.kind.short_detail, "8:12 - 3rd");
        assert_eq!(
            payload.events[0].competitions[0].competitors[1].team.display_name,
            "Buffalo Bills"
        );
    }

    #[test]
    fn test_convert_fixture() {
        let payload: ScoreboardPayload = serde_json::from_str(SCOREBOARD_JSON).unwrap();
        let scoreboard = ScoreboardResponse::from(payload);

        let live = &scoreboard.events[0];
        assert_eq!(live.status.state, GameState::In);
        assert_eq!(live.competition.home().unwrap().team_name, "New York Jets");
        assert_eq!(live.competition.away().unwrap().score, "14");

        let scheduled = &scoreboard.events[1];
        assert_eq!(scheduled.status.state, GameState::Pre);
        assert_eq!(scheduled.competition.away().unwrap().score, "");

        assert_eq!(scoreboard.events[2].status.state, GameState::Final);
    }

    #[test]
    fn test_missing_events_key() {
        let payload: ScoreboardPayload = serde_json::from_str("{}").unwrap();
        assert!(ScoreboardResponse::from(payload).events.is_empty());
    }

    #[test]
    fn test_event_without_competitions() {
        let json = r#"{ "events": [ { "status": { "type": { "state": "pre", "shortDetail": "Postponed" } } } ] }"#;
        let payload: ScoreboardPayload = serde_json::from_str(json).unwrap();
        let scoreboard = ScoreboardResponse::from(payload);
        assert_eq!(scoreboard.events.len(), 1);
        assert!(scoreboard.events[0].competition.competitors.is_empty());
    }

    #[test]
    fn test_only_first_competition_is_kept() {
        let json = r#"{ "events": [ { "competitions": [
            { "competitors": [ { "team": { "displayName": "A" } }, { "team": { "displayName": "B" } } ] },
            { "competitors": [ { "team": { "displayName": "C" } } ] }
        ] } ] }"#;
        let payload: ScoreboardPayload = serde_json::from_str(json).unwrap();
        let event = Event::from(payload.events.into_iter().next().unwrap());
        assert_eq!(event.competition.competitors.len(), 2);
        assert_eq!(event.competition.home().unwrap().team_name, "A");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let json = r#"{ "events": [ { "competitions": [ { "competitors": [ { "score": 14 } ] } ] } ] }"#;
        assert!(serde_json::from_str::<ScoreboardPayload>(json).is_err());
    }
}
