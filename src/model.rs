/// Domain types for a decoded scoreboard
///
/// These are independent of the ESPN wire format; see `espn::wire` for the
/// serde structs and their conversion into these types.

/// Lifecycle stage of a game as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Scheduled, not yet kicked off
    Pre,
    /// Live
    In,
    /// Finished, or any state the API reports that is not `pre`/`in`
    Final,
}

impl GameState {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, GameState::Pre)
    }
}

impl From<&str> for GameState {
    fn from(state: &str) -> Self {
        match state {
            "pre" => GameState::Pre,
            "in" => GameState::In,
            _ => GameState::Final,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStatus {
    pub state: GameState,
    /// Short human-readable detail, e.g. "Sun 1:00PM" or "Q3 8:12"
    pub short_detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub team_name: String,
    /// Score as transmitted by the API; never parsed
    pub score: String,
}

/// Teams in a game, positionally tagged: `[0]` is home, `[1]` is away
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Competition {
    pub competitors: Vec<Competitor>,
}

impl Competition {
    pub fn home(&self) -> Option<&Competitor> {
        self.competitors.first()
    }

    pub fn away(&self) -> Option<&Competitor> {
        self.competitors.get(1)
    }
}

/// One scheduled, live or finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub status: EventStatus,
    pub competition: Competition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreboardResponse {
    pub events: Vec<Event>,
}
