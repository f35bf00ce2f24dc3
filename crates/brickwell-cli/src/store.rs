use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use brickwell_engine::{HighScoreStore, HighScoreStoreError, PieceSeed};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk layout of the high score file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct HighScoreFile {
    #[serde(default)]
    pub players: BTreeMap<String, PlayerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlayerRecord {
    pub high_score: u64,
    pub updated_at: DateTime<Utc>,
    /// Piece seed of the run that set the score; `play --seed` replays it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PieceSeed>,
}

/// High scores kept in one JSON document keyed by player name.
///
/// The file is read on every load and rewritten on every save; saves only
/// happen when a player beats their record, so this stays cheap. A missing
/// file is an empty store.
#[derive(Debug, Clone)]
pub(crate) struct JsonHighScoreStore {
    path: PathBuf,
    seed: Option<PieceSeed>,
}

impl JsonHighScoreStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: None,
        }
    }

    /// Records `seed` alongside every score this store saves.
    pub(crate) fn with_seed(self, seed: PieceSeed) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn read_records(&self) -> Result<HighScoreFile, HighScoreStoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScoreFile::default()),
            Err(e) => return Err(HighScoreStoreError::Io(e)),
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            HighScoreStoreError::Malformed(format!("{}: {e}", self.path.display()))
        })
    }

    fn write_records(&self, records: &HighScoreFile) -> Result<(), HighScoreStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(HighScoreStoreError::Io)?;
        }
        let file = File::create(&self.path).map_err(HighScoreStoreError::Io)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| HighScoreStoreError::Io(e.into()))?;
        writeln!(writer).map_err(HighScoreStoreError::Io)?;
        writer.flush().map_err(HighScoreStoreError::Io)
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load_high_score(&mut self, player: &str) -> Result<u64, HighScoreStoreError> {
        let records = self.read_records()?;
        Ok(records.players.get(player).map_or(0, |r| r.high_score))
    }

    fn save_high_score(&mut self, player: &str, score: u64) -> Result<(), HighScoreStoreError> {
        // A malformed file is reported, not overwritten.
        let mut records = self.read_records()?;
        records.players.insert(
            player.to_owned(),
            PlayerRecord {
                high_score: score,
                updated_at: Utc::now(),
                seed: self.seed,
            },
        );
        self.write_records(&records)
    }
}
