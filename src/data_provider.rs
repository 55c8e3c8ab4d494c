/// Trait for providing scoreboard data, abstracting over the real API client and mock implementations
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ScoreboardError;
use crate::espn::{EspnClient, League};
use crate::model::ScoreboardResponse;

/// Trait for scoreboard providers, implemented by both EspnClient and MockClient
#[async_trait]
pub trait ScoreboardProvider: Send + Sync {
    /// Get the scoreboard for a league; `None` means the current week
    async fn scoreboard(
        &self,
        league: League,
        date: Option<NaiveDate>,
    ) -> Result<ScoreboardResponse, ScoreboardError>;
}

#[async_trait]
impl ScoreboardProvider for EspnClient {
    async fn scoreboard(
        &self,
        league: League,
        date: Option<NaiveDate>,
    ) -> Result<ScoreboardResponse, ScoreboardError> {
        EspnClient::scoreboard(self, league, date).await
    }
}
