//! Layered defaults for new games.
//!
//! Built-in defaults, then the TOML file named by `SEQUENCE_CONFIG`, then the
//! `SEQUENCE_SEED`, `SEQUENCE_PLAYERS`, `SEQUENCE_BOARD` and
//! `SEQUENCE_WIN_CONDITION` environment variables. Each resolved value keeps
//! track of where it came from.

use serde::{Deserialize, Serialize};
use std::fs;

use sequence_engine::board::BoardType;
use sequence_engine::player::SUPPORTED_PLAYER_COUNTS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: usize,
    pub board: BoardType,
    pub win_condition: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub board: ValueSource,
    pub win_condition: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            board: ValueSource::Default,
            win_condition: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            players: 2,
            board: BoardType::Sequence,
            win_condition: 2,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SEQUENCE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.board {
            cfg.board = v;
            sources.board = ValueSource::File;
        }
        if let Some(v) = f.win_condition {
            cfg.win_condition = v;
            sources.win_condition = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SEQUENCE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("SEQUENCE_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(board) = std::env::var("SEQUENCE_BOARD")
        && !board.is_empty()
    {
        cfg.board = board.parse().map_err(ConfigError::Invalid)?;
        sources.board = ValueSource::Env;
    }
    if let Ok(win) = std::env::var("SEQUENCE_WIN_CONDITION")
        && !win.is_empty()
    {
        cfg.win_condition = win
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid win condition: {}", win)))?;
        sources.win_condition = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    board: Option<BoardType>,
    #[serde(default)]
    win_condition: Option<u8>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !SUPPORTED_PLAYER_COUNTS.contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be one of 2, 3, 4, 6 (got {})",
            cfg.players
        )));
    }
    if !(1..=4).contains(&cfg.win_condition) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: win_condition must be 1-4 (got {})",
            cfg.win_condition
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 5] = [
        "SEQUENCE_CONFIG",
        "SEQUENCE_SEED",
        "SEQUENCE_PLAYERS",
        "SEQUENCE_BOARD",
        "SEQUENCE_WIN_CONDITION",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.players, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "players = 4\nboard = \"one-eyed-jack\"\nseed = 5").unwrap();
        set_env("SEQUENCE_CONFIG", file.path().to_str().unwrap());
        set_env("SEQUENCE_SEED", "99");

        let resolved = load_with_sources().unwrap();
        clear_env();
        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.board, BoardType::OneEyedJack);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.win_condition, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn rejects_unsupported_values() {
        clear_env();
        set_env("SEQUENCE_PLAYERS", "5");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
        set_env("SEQUENCE_WIN_CONDITION", "0");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
        set_env("SEQUENCE_BOARD", "hexagonal");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
    }
}
