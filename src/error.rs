/// Errors raised while fetching, decoding or transforming a scoreboard.
#[derive(thiserror::Error, Debug)]
pub enum ScoreboardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("failed to fetch scoreboard from {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("failed to fetch scoreboard from {url}: status code {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The body was not a scoreboard JSON document.
    #[error("failed to parse scoreboard JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// An event's competition does not list both a home and an away team.
    #[error("event #{index} has {competitors} competitor(s), expected at least 2")]
    MalformedEvent { index: usize, competitors: usize },
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
