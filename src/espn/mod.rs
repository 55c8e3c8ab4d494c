/// Serde mirror of the scoreboard payload
pub mod wire;

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::error::{Result, ScoreboardError};
use crate::model::ScoreboardResponse;
use wire::ScoreboardPayload;

/// Default base URL of the public ESPN site API
pub const DEFAULT_API_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Leagues the scoreboard can be fetched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Nfl,
}

impl League {
    /// Sport/league path segment in the ESPN URL
    pub fn path(&self) -> &'static str {
        match self {
            League::Nfl => "football/nfl",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
        }
    }
}

/// Scoreboard URL for a league, optionally pinned to a date
pub fn scoreboard_url(base_url: &str, league: League, date: Option<NaiveDate>) -> String {
    let mut url = format!(
        "{}/{}/scoreboard",
        base_url.trim_end_matches('/'),
        league.path()
    );
    if let Some(date) = date {
        url.push_str(&format!("?dates={}", date.format("%Y%m%d")));
    }
    url
}

/// Decode a scoreboard body into domain types
pub fn parse_scoreboard(url: &str, body: &str) -> Result<ScoreboardResponse> {
    let payload: ScoreboardPayload =
        serde_json::from_str(body).map_err(|source| ScoreboardError::Decode {
            url: url.to_string(),
            source,
        })?;
    Ok(payload.into())
}

/// Thin wrapper over [`reqwest::Client`] for the ESPN scoreboard endpoint
pub struct EspnClient {
    http: reqwest::Client,
    base_url: String,
}

impl EspnClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ScoreboardError::Http {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client using the provided [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    pub async fn scoreboard(
        &self,
        league: League,
        date: Option<NaiveDate>,
    ) -> Result<ScoreboardResponse> {
        let url = scoreboard_url(&self.base_url, league, date);
        info!("Fetching {} scoreboard from {}", league.name(), url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ScoreboardError::Http {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScoreboardError::UnexpectedStatus { url, status });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| ScoreboardError::ResponseBody {
                url: url.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", body.len(), url);

        parse_scoreboard(&url, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SCOREBOARD_JSON;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port, returning its base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_scoreboard_url_current_week() {
        assert_eq!(
            scoreboard_url(DEFAULT_API_BASE_URL, League::Nfl, None),
            "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard"
        );
    }

    #[test]
    fn test_scoreboard_url_with_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            scoreboard_url("http://localhost:8080/", League::Nfl, Some(date)),
            "http://localhost:8080/football/nfl/scoreboard?dates=20261019"
        );
    }

    #[test]
    fn test_parse_scoreboard_fixture() {
        let scoreboard = parse_scoreboard("test", SCOREBOARD_JSON).unwrap();
        assert_eq!(scoreboard.events.len(), 3);
    }

    #[test]
    fn test_parse_scoreboard_invalid_json() {
        match parse_scoreboard("http://localhost/scoreboard", "<html>oops</html>") {
            Err(ScoreboardError::Decode { url, .. }) => {
                assert_eq!(url, "http://localhost/scoreboard")
            }
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = EspnClient::new("http://localhost:9999", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = EspnClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = client.scoreboard(League::Nfl, None).await;
        assert!(matches!(result, Err(ScoreboardError::Http { .. })));
    }

    #[tokio::test]
    async fn test_server_error_is_unexpected_status() {
        let base_url = serve_once("500 Internal Server Error", "{}").await;
        let client = EspnClient::new(&base_url, Duration::from_secs(5)).unwrap();
        match client.scoreboard(League::Nfl, None).await {
            Err(ScoreboardError::UnexpectedStatus { url, status }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(url, format!("{}/football/nfl/scoreboard", base_url));
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ok_response_is_decoded() {
        let base_url = serve_once("200 OK", SCOREBOARD_JSON).await;
        let client = EspnClient::new(&base_url, Duration::from_secs(5)).unwrap();
        let scoreboard = client.scoreboard(League::Nfl, None).await.unwrap();
        assert_eq!(scoreboard.events.len(), 3);
    }

    #[tokio::test]
    async fn test_ok_response_with_html_is_decode_error() {
        let base_url = serve_once("200 OK", "<html>maintenance</html>").await;
        let client = EspnClient::new(&base_url, Duration::from_secs(5)).unwrap();
        let result = client.scoreboard(League::Nfl, None).await;
        assert!(matches!(result, Err(ScoreboardError::Decode { .. })));
    }
}
