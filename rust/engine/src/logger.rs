use serde::{Deserialize, Serialize};

use crate::errors::ReplayError;
use crate::game::{GameEvent, GameId, GameInit, GameState};

/// Complete record of one game: its setup and every event in order.
/// Serialized one record per line (JSONL) for storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: GameId,
    /// Game setup
    pub init: GameInit,
    /// Chronological event log
    #[serde(default)]
    pub events: Vec<GameEvent>,
    /// Timestamp of the last write (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    pub fn new(game_id: GameId, init: GameInit) -> Self {
        Self {
            game_id,
            init,
            events: Vec::new(),
            ts: None,
            meta: None,
        }
    }

    /// Current state of the recorded game.
    pub fn replay(&self) -> Result<GameState, ReplayError> {
        GameState::replay(&self.init, &self.events)
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: BufWriter<File>,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
