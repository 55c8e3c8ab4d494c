use crate::commands::parse_game_date;
use crate::data_provider::ScoreboardProvider;
use crate::espn::League;
use crate::table::{self, TableStyle};
use crate::transform::transform;
use anyhow::{Context, Result};
use tracing::info;

/// Fetch, transform and render a scoreboard into printable text
pub async fn render(
    client: &dyn ScoreboardProvider,
    league: League,
    date: Option<String>,
    style: &TableStyle,
    use_color: bool,
) -> Result<String> {
    let game_date = parse_game_date(date)?;

    let scoreboard = client
        .scoreboard(league, game_date)
        .await
        .with_context(|| format!("Failed to fetch {} scoreboard", league.name()))?;

    let rows = transform(&scoreboard)
        .with_context(|| format!("Unexpected {} scoreboard data", league.name()))?;
    info!("Rendering {} games", rows.len());

    let mut output = table::render_to_string(&rows, style, use_color)
        .context("Failed to render scoreboard table")?;

    if rows.is_empty() {
        output.push_str("No games scheduled.\n");
    }

    Ok(output)
}

pub async fn run(
    client: &dyn ScoreboardProvider,
    league: League,
    date: Option<String>,
    style: &TableStyle,
    use_color: bool,
) -> Result<()> {
    let output = render(client, league, date, style, use_color).await?;
    print!("{}", output);
    Ok(())
}
