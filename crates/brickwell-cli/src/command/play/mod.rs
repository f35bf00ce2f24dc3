use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use brickwell_engine::{PieceSeed, RandomPieceSource, WellSize};

use crate::{
    command::play::{app::PlayApp, screens::login},
    host::Cadence,
    tui::Runtime,
};

mod app;
mod screens;

pub(crate) const DEFAULT_STORE_PATH: &str = "./data/high_scores.json";

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct PlayArg {
    /// Player name; skips the login screen
    #[clap(long)]
    player: Option<String>,
    /// High score file (JSON)
    #[clap(long, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    /// Keep high scores in memory only
    #[clap(long)]
    no_persist: bool,
    /// Replay the piece sequence of a seed (32 hex digits)
    #[clap(long)]
    seed: Option<PieceSeed>,
    #[clap(flatten)]
    well: WellArg,
    #[clap(flatten)]
    cadence: CadenceArg,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            player: None,
            store: PathBuf::from(DEFAULT_STORE_PATH),
            no_persist: false,
            seed: None,
            well: WellArg::default(),
            cadence: CadenceArg::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
struct WellArg {
    /// Number of columns in the well
    #[clap(long, default_value_t = 10)]
    columns: u32,
    /// Play-field height in pixels; rows = field height / cell size
    #[clap(long, default_value_t = 600)]
    field_height: u32,
    /// Cell size in pixels
    #[clap(long, default_value_t = 30)]
    cell_size: u32,
}

impl Default for WellArg {
    fn default() -> Self {
        Self {
            columns: 10,
            field_height: 600,
            cell_size: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
struct CadenceArg {
    /// Milliseconds between automatic drops
    #[clap(long, default_value_t = 500)]
    drop_interval_ms: u64,
    /// Milliseconds between drops while soft drop is held
    #[clap(long, default_value_t = 50)]
    soft_drop_interval_ms: u64,
    /// Milliseconds a direction key is held before it repeats
    #[clap(long, default_value_t = 200)]
    initial_move_delay_ms: u64,
    /// Milliseconds between repeated moves
    #[clap(long, default_value_t = 50)]
    move_repeat_ms: u64,
}

impl Default for CadenceArg {
    fn default() -> Self {
        Self {
            drop_interval_ms: 500,
            soft_drop_interval_ms: 50,
            initial_move_delay_ms: 200,
            move_repeat_ms: 50,
        }
    }
}

impl From<&CadenceArg> for Cadence {
    fn from(arg: &CadenceArg) -> Self {
        Self {
            drop_interval: Duration::from_millis(arg.drop_interval_ms),
            soft_drop_interval: Duration::from_millis(arg.soft_drop_interval_ms),
            initial_move_delay: Duration::from_millis(arg.initial_move_delay_ms),
            move_repeat: Duration::from_millis(arg.move_repeat_ms),
        }
    }
}

/// Where the game screen keeps high scores.
#[derive(Debug, Clone)]
pub(crate) enum StoreChoice {
    Json(PathBuf),
    Memory,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        player,
        store,
        no_persist,
        seed,
        well,
        cadence,
    } = arg;

    if let Some(player) = player {
        login::validate_player_name(player)
            .with_context(|| format!("Invalid --player value: {player:?}"))?;
    }
    let size = WellSize::from_play_field(well.field_height, well.cell_size, well.columns)
        .context("Invalid well dimensions")?;
    let pieces = seed.map_or_else(RandomPieceSource::new, RandomPieceSource::with_seed);
    let seed = pieces.seed();
    let store = if *no_persist {
        StoreChoice::Memory
    } else {
        StoreChoice::Json(store.clone())
    };

    let mut app = PlayApp::new(size, cadence.into(), pieces, store, player.clone());
    Runtime::new()
        .run(&mut app)
        .context("Terminal UI failed")?;

    if let Some(report) = app.into_report() {
        eprintln!(
            "{}: score {}, high score {}, {} lines in {} pieces",
            report.player,
            report.score,
            report.high_score,
            report.lines_cleared,
            report.completed_pieces
        );
        let [_, single, double, triple, tetris] = report.line_clears;
        eprintln!("line clears: {single} single, {double} double, {triple} triple, {tetris} tetris");
        eprintln!("piece seed: {seed}");
        for failure in &report.persistence_failures {
            eprintln!("warning: {failure}");
        }
    }

    Ok(())
}
