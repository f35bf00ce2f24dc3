use std::path::PathBuf;

use anyhow::Context as _;

use crate::{command::play::DEFAULT_STORE_PATH, store::JsonHighScoreStore};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoresArg {
    /// High score file (JSON)
    #[clap(long, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    /// Only show this player
    #[clap(long)]
    player: Option<String>,
}

pub(crate) fn run(arg: &ScoresArg) -> anyhow::Result<()> {
    let ScoresArg { store, player } = arg;

    let store = JsonHighScoreStore::new(store);
    let records = store
        .read_records()
        .with_context(|| format!("Failed to read high scores: {}", store.path().display()))?;

    let mut rows: Vec<_> = records
        .players
        .iter()
        .filter(|(name, _)| player.as_ref().is_none_or(|p| p == *name))
        .collect();
    if rows.is_empty() {
        println!("no high scores recorded");
        return Ok(());
    }
    rows.sort_by(|(a_name, a), (b_name, b)| {
        b.high_score
            .cmp(&a.high_score)
            .then_with(|| a_name.cmp(b_name))
    });

    let name_width = name_column_width(rows.iter().map(|(name, _)| name.as_str()));
    println!(
        "{:<name_width$}  {:>10}  {:<23}  SEED",
        "PLAYER", "HIGH SCORE", "UPDATED"
    );
    for (name, record) in rows {
        let seed = record
            .seed
            .map_or_else(|| "-".to_owned(), |seed| seed.to_string());
        println!(
            "{name:<name_width$}  {:>10}  {:<23}  {seed}",
            record.high_score,
            record.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        );
    }
    Ok(())
}

/// Width of the player column in characters, never narrower than its header.
fn name_column_width<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names
        .into_iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("PLAYER".len())
}
