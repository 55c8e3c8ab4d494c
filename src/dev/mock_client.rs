/// Mock scoreboard client for development and testing
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::data_provider::ScoreboardProvider;
use crate::error::ScoreboardError;
use crate::espn::League;
use crate::fixtures;
use crate::model::ScoreboardResponse;

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient {
    scoreboard: ScoreboardResponse,
}

impl MockClient {
    /// Create a mock client serving the fixture week
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::with_scoreboard(fixtures::create_mock_scoreboard())
    }

    /// Create a mock client serving the given scoreboard
    pub fn with_scoreboard(scoreboard: ScoreboardResponse) -> Self {
        Self { scoreboard }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreboardProvider for MockClient {
    async fn scoreboard(
        &self,
        league: League,
        date: Option<NaiveDate>,
    ) -> Result<ScoreboardResponse, ScoreboardError> {
        info!(
            "MockClient: Returning mock {} scoreboard for date: {:?}",
            league.name(),
            date
        );
        Ok(self.scoreboard.clone())
    }
}
