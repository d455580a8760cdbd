//! A JSONL file of [`GameRecord`]s used as the CLI's event store.
//!
//! Every accepted event is written through to disk immediately, so the file
//! is always the complete log of each game it holds.

use chrono::{SecondsFormat, Utc};
use sequence_engine::errors::StoreError;
use sequence_engine::game::{GameEvent, GameId, GameInit};
use sequence_engine::logger::{GameLogger, GameRecord};
use sequence_engine::store::{EventStore, append_checked};

use crate::error::CliError;
use crate::io_utils::{read_text_auto, replace_file, write_text_auto};

#[derive(Debug)]
pub struct GameFile {
    path: String,
    records: Vec<GameRecord>,
}

impl GameFile {
    /// Loads every record in `path`. Blank lines are skipped; any other line
    /// that is not a game record is an error naming its line number.
    pub fn open(path: &str) -> Result<Self, CliError> {
        let content = read_text_auto(path)?;
        let mut records = Vec::new();
        for (n, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: GameRecord = serde_json::from_str(line).map_err(|e| {
                CliError::InvalidInput(format!("{} line {}: {}", path, n + 1, e))
            })?;
            records.push(record);
        }
        tracing::debug!(path, games = records.len(), "game file loaded");
        Ok(Self {
            path: path.to_string(),
            records,
        })
    }

    /// An empty game file at `path`; nothing is written until a game is created.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// The game named `id`, or the last game in the file.
    pub fn select(&self, id: Option<&str>) -> Result<&GameRecord, CliError> {
        match id {
            Some(id) => self
                .records
                .iter()
                .find(|r| r.game_id.0 == id)
                .ok_or_else(|| {
                    CliError::InvalidInput(format!("game {} not found in {}", id, self.path))
                }),
            None => self
                .records
                .last()
                .ok_or_else(|| CliError::InvalidInput(format!("{} holds no games", self.path))),
        }
    }

    /// Rewrites the whole file through a sibling `.tmp` file, so a failed
    /// write leaves the previous log intact. Each record keeps its own `ts`.
    fn save(&self) -> Result<(), String> {
        tracing::debug!(path = %self.path, games = self.records.len(), "saving game file");
        if self.path.ends_with(".zst") {
            let mut content = String::new();
            for record in &self.records {
                content.push_str(&serde_json::to_string(record).map_err(|e| e.to_string())?);
                content.push('\n');
            }
            return write_text_auto(&self.path, &content);
        }
        replace_file(&self.path, |tmp| {
            let mut logger = GameLogger::create(tmp).map_err(|e| format!("{}: {}", tmp, e))?;
            for record in &self.records {
                logger.write(record).map_err(|e| format!("{}: {}", tmp, e))?;
            }
            Ok(())
        })
    }

    fn record_mut(&mut self, game_id: &GameId) -> Result<&mut GameRecord, StoreError> {
        self.records
            .iter_mut()
            .find(|r| &r.game_id == game_id)
            .ok_or_else(|| StoreError::GameNotFound(game_id.clone()))
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl EventStore for GameFile {
    fn create_game(&mut self, game_id: &GameId, init: GameInit) -> Result<(), StoreError> {
        if self.records.iter().any(|r| &r.game_id == game_id) {
            return Err(StoreError::GameAlreadyExists(game_id.clone()));
        }
        let mut record = GameRecord::new(game_id.clone(), init);
        record.ts = Some(now());
        self.records.push(record);
        self.save().map_err(StoreError::Backend)
    }

    fn add_event(&mut self, game_id: &GameId, event: GameEvent) -> Result<(), StoreError> {
        let record = self.record_mut(game_id)?;
        append_checked(game_id, &mut record.events, event)?;
        record.ts = Some(now());
        self.save().map_err(StoreError::Backend)
    }

    fn get_game_by_id(&self, game_id: &GameId) -> Result<(GameInit, Vec<GameEvent>), StoreError> {
        self.records
            .iter()
            .find(|r| &r.game_id == game_id)
            .map(|r| (r.init.clone(), r.events.clone()))
            .ok_or_else(|| StoreError::GameNotFound(game_id.clone()))
    }
}
