//! Enemy data: source file parsing, flag decoding, and record assembly.

pub mod config;
pub mod enemy;
pub mod error;
pub mod flags;
pub mod loader;
pub mod row;
pub mod text_table;

pub use config::EnemyDataPaths;
pub use enemy::{find_enemy, Enemy, Rarity};
pub use error::{LoadError, LoadResult};
pub use flags::{Ability, Affect, AttackType, Trait};
pub use loader::{
    load_all_enemies, load_all_enemies_with_report, load_enemies, FieldIssue, LoadReport,
};
