//! Enemy record as consumed by the game-data application.

use serde::{Deserialize, Serialize};

use crate::data::flags::{
    decode_abilities, decode_affects, decode_attack_types, decode_traits, Ability, Affect,
    AttackType, Trait,
};
use crate::data::row::EnemyRow;

/// Column positions of the plain stats in a stats row.
pub mod stat_column {
    pub const HP: usize = 0;
    pub const HEATBACK: usize = 1;
    pub const SPEED: usize = 2;
    pub const ATK: usize = 3;
    /// Stored in half units; doubled on load.
    pub const TBA: usize = 4;
    pub const RANGE: usize = 5;
    pub const PRICE: usize = 6;
    /// Stored in half units; doubled on load.
    pub const RESPAWN_HALF: usize = 7;
    pub const WIDTH: usize = 9;
    pub const PRE_ATTACK_FRAME: usize = 13;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Unknown,
}

/// One enemy. `id` is the 0-based position of its row among the non-blank
/// lines of the stats file; it is never read from the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enemy {
    pub id: usize,
    pub name: String,
    pub form: u32,
    pub description: String,
    pub image: Option<String>,
    pub rarity: Rarity,

    pub targets: Vec<Trait>,
    pub attack_type: Vec<AttackType>,
    pub affects: Vec<Affect>,
    pub abilities: Vec<Ability>,

    pub price: i64,
    pub hp: i64,
    pub atk: i64,
    pub speed: i64,
    pub heatback: i64,
    pub tba: i64,
    pub pre_attackframe: i64,
    pub respawn_half: i64,
    pub range: i64,
    pub width: i64,
}

pub fn fallback_name(id: usize) -> String {
    format!("Enemy {id}")
}

impl Enemy {
    /// Build the record for row `id`. Missing name/description fall back to
    /// `"Enemy {id}"` and the empty string.
    pub fn from_row(
        id: usize,
        row: &EnemyRow,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        use stat_column as col;

        Enemy {
            id,
            name: name.map_or_else(|| fallback_name(id), str::to_string),
            form: 0,
            description: description.unwrap_or_default().to_string(),
            image: None,
            rarity: Rarity::Unknown,

            targets: decode_traits(row),
            attack_type: decode_attack_types(row),
            affects: decode_affects(row),
            abilities: decode_abilities(row),

            price: row.get(col::PRICE),
            hp: row.get(col::HP),
            atk: row.get(col::ATK),
            speed: row.get(col::SPEED),
            heatback: row.get(col::HEATBACK),
            tba: row.get(col::TBA).saturating_mul(2),
            pre_attackframe: row.get(col::PRE_ATTACK_FRAME),
            respawn_half: row.get(col::RESPAWN_HALF).saturating_mul(2),
            range: row.get(col::RANGE),
            width: row.get(col::WIDTH),
        }
    }
}

/// Enemy with the given id, relying on ids being row positions.
pub fn find_enemy(enemies: &[Enemy], id: usize) -> Option<&Enemy> {
    enemies.get(id).filter(|enemy| enemy.id == id)
}
