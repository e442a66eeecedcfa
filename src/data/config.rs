//! Locations of the three enemy source files.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ENEMY_STATS_PATH: &str = "data/t_unit.csv";
pub const DEFAULT_ENEMY_NAMES_PATH: &str = "data/EnemyName.txt";
pub const DEFAULT_ENEMY_DESCRIPTIONS_PATH: &str = "data/EnemyExplanation.txt";

const STATS_FILE_NAME: &str = "t_unit.csv";
const NAMES_FILE_NAME: &str = "EnemyName.txt";
const DESCRIPTIONS_FILE_NAME: &str = "EnemyExplanation.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyDataPaths {
    /// Comma-separated stat rows, one enemy per non-blank line.
    pub stats: PathBuf,
    /// `id<TAB>name` lines.
    pub names: PathBuf,
    /// `id<TAB>description...` lines.
    pub descriptions: PathBuf,
}

impl Default for EnemyDataPaths {
    fn default() -> Self {
        EnemyDataPaths {
            stats: PathBuf::from(DEFAULT_ENEMY_STATS_PATH),
            names: PathBuf::from(DEFAULT_ENEMY_NAMES_PATH),
            descriptions: PathBuf::from(DEFAULT_ENEMY_DESCRIPTIONS_PATH),
        }
    }
}

impl EnemyDataPaths {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        EnemyDataPaths {
            stats: dir.join(STATS_FILE_NAME),
            names: dir.join(NAMES_FILE_NAME),
            descriptions: dir.join(DESCRIPTIONS_FILE_NAME),
        }
    }
}
