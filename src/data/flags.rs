//! Column → tag tables and the four decoders that apply them to an [`EnemyRow`].
//!
//! Each table is the single source of truth for its tag family; the decoders
//! only walk them in order, so output order is always table order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::row::EnemyRow;

/// Attacker categories an enemy counts as a target for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trait {
    Red,
    Floating,
    Black,
    Metal,
    White,
    Angel,
    Alien,
    Zombie,
    Relic,
    Demon,
}

/// Status effects an enemy inflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affect {
    Slow,
    Stop,
    Knockback,
    Weak,
    MassiveDamage,
    InsaneDamage,
    Good,
    Resistant,
    InsanelyTough,
    Curse,
    Only,
    Warp,
    #[serde(rename = "ImuATK")]
    ImuAtk,
}

/// Special combat abilities and immunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    AtkUp,
    #[serde(rename = "LETHAL")]
    Lethal,
    BaseDestroyer,
    Critical,
    MetalKiller,
    ZombieKiller,
    SoulStrike,
    BarrierBreak,
    ShieldBreak,
    #[serde(rename = "StrickAttack")]
    StrikeAttack,
    Bounty,
    Metallic,
    MiniWave,
    Wave,
    MiniVolcano,
    Volcano,
    VolcanoCounter,
    Blast,
    WaveBlocker,
    Summon,
    #[serde(rename = "ColosusSlayer")]
    ColossusSlayer,
    BehemothSlayer,
    SageHunter,
    ImuWeak,
    #[serde(rename = "ImuKB")]
    ImuKnockback,
    ImuStop,
    ImuSlow,
    ImuWarp,
    ImuCurse,
    ImuPoison,
    ImuWave,
    ImuVolcano,
    ImuBlast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Single,
    Range,
    Long,
    Omni,
}

/// One ability column. When `suppressed_by` is set, the ability only shows if
/// that column is a real 0; a positive or non-numeric value hides it (the mini
/// variant wins over the plain one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityRule {
    pub column: usize,
    pub ability: Ability,
    pub suppressed_by: Option<usize>,
}

const fn rule(column: usize, ability: Ability) -> AbilityRule {
    AbilityRule {
        column,
        ability,
        suppressed_by: None,
    }
}

const fn rule_unless(column: usize, ability: Ability, suppressor: usize) -> AbilityRule {
    AbilityRule {
        column,
        ability,
        suppressed_by: Some(suppressor),
    }
}

/// Trait present iff the column is exactly 1.
pub static TRAIT_COLUMNS: &[(usize, Trait)] = &[
    (10, Trait::Red),
    (16, Trait::Floating),
    (17, Trait::Black),
    (18, Trait::Metal),
    (19, Trait::White),
    (20, Trait::Angel),
    (21, Trait::Alien),
    (22, Trait::Zombie),
    (78, Trait::Relic),
    (96, Trait::Demon),
];

/// Affect present iff the column is positive.
pub static AFFECT_COLUMNS: &[(usize, Affect)] = &[
    (27, Affect::Slow),
    (25, Affect::Stop),
    (24, Affect::Knockback),
    (37, Affect::Weak),
    (30, Affect::MassiveDamage),
    (81, Affect::InsaneDamage),
    (23, Affect::Good),
    (29, Affect::Resistant),
    (80, Affect::InsanelyTough),
    (92, Affect::Curse),
    (32, Affect::Only),
    (75, Affect::Warp),
    (84, Affect::ImuAtk),
];

pub const MINI_WAVE_COLUMN: usize = 94;
pub const MINI_VOLCANO_COLUMN: usize = 108;

/// Ability present iff the column is positive and its suppressor (if any) is a real zero.
pub static ABILITY_RULES: &[AbilityRule] = &[
    rule(40, Ability::AtkUp),
    rule(42, Ability::Lethal),
    rule(34, Ability::BaseDestroyer),
    rule(31, Ability::Critical),
    rule(112, Ability::MetalKiller),
    rule(52, Ability::ZombieKiller),
    rule(98, Ability::SoulStrike),
    rule(70, Ability::BarrierBreak),
    rule(95, Ability::ShieldBreak),
    rule(82, Ability::StrikeAttack),
    rule(33, Ability::Bounty),
    rule(43, Ability::Metallic),
    rule(MINI_WAVE_COLUMN, Ability::MiniWave),
    rule_unless(35, Ability::Wave, MINI_WAVE_COLUMN),
    rule(MINI_VOLCANO_COLUMN, Ability::MiniVolcano),
    rule_unless(86, Ability::Volcano, MINI_VOLCANO_COLUMN),
    rule(109, Ability::VolcanoCounter),
    rule(113, Ability::Blast),
    rule(47, Ability::WaveBlocker),
    rule(110, Ability::Summon),
    rule(97, Ability::ColossusSlayer),
    rule(105, Ability::BehemothSlayer),
    rule(111, Ability::SageHunter),
    rule(51, Ability::ImuWeak),
    rule(48, Ability::ImuKnockback),
    rule(49, Ability::ImuStop),
    rule(50, Ability::ImuSlow),
    rule(75, Ability::ImuWarp),
    rule(79, Ability::ImuCurse),
    rule(90, Ability::ImuPoison),
    rule(46, Ability::ImuWave),
    rule(91, Ability::ImuVolcano),
    rule(116, Ability::ImuBlast),
];

/// Exactly 1 means area attack.
pub const RANGE_COLUMN: usize = 12;
/// Negative means omni strike; any other non-zero value, or a non-numeric
/// field, means long distance.
pub const LONG_DISTANCE_COLUMN: usize = 45;

pub fn decode_traits(row: &EnemyRow) -> Vec<Trait> {
    TRAIT_COLUMNS
        .iter()
        .filter(|(column, _)| row.get(*column) == 1)
        .map(|(_, tag)| *tag)
        .collect()
}

pub fn decode_affects(row: &EnemyRow) -> Vec<Affect> {
    AFFECT_COLUMNS
        .iter()
        .filter(|(column, _)| row.get(*column) > 0)
        .map(|(_, tag)| *tag)
        .collect()
}

pub fn decode_abilities(row: &EnemyRow) -> Vec<Ability> {
    ABILITY_RULES
        .iter()
        .filter(|rule| {
            row.get(rule.column) > 0
                && rule
                    .suppressed_by
                    .map_or(true, |suppressor| row.is_zero(suppressor))
        })
        .map(|rule| rule.ability)
        .collect()
}

/// Never empty: falls back to [`AttackType::Single`].
pub fn decode_attack_types(row: &EnemyRow) -> Vec<AttackType> {
    let mut out = Vec::with_capacity(2);
    if row.get(RANGE_COLUMN) == 1 {
        out.push(AttackType::Range);
    }
    match row.get(LONG_DISTANCE_COLUMN) {
        0 if row.is_zero(LONG_DISTANCE_COLUMN) => {}
        ldr if ldr < 0 => out.push(AttackType::Omni),
        _ => out.push(AttackType::Long),
    }
    if out.is_empty() {
        out.push(AttackType::Single);
    }
    out
}

impl Trait {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Floating => "Floating",
            Self::Black => "Black",
            Self::Metal => "Metal",
            Self::White => "White",
            Self::Angel => "Angel",
            Self::Alien => "Alien",
            Self::Zombie => "Zombie",
            Self::Relic => "Relic",
            Self::Demon => "Demon",
        }
    }
}

impl AttackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
            Self::Long => "long",
            Self::Omni => "omni",
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn row_with(cells: &[(usize, i64)]) -> EnemyRow {
        let mut values = vec![0; 120];
        for (column, value) in cells {
            values[*column] = *value;
        }
        EnemyRow::from_values(values)
    }

    #[test]
    fn tables_have_no_duplicate_columns_within_a_family() {
        let traits: HashSet<_> = TRAIT_COLUMNS.iter().map(|(c, _)| *c).collect();
        let affects: HashSet<_> = AFFECT_COLUMNS.iter().map(|(c, _)| *c).collect();
        let abilities: HashSet<_> = ABILITY_RULES.iter().map(|r| r.column).collect();
        assert_eq!(traits.len(), 10);
        assert_eq!(affects.len(), 13);
        assert_eq!(abilities.len(), ABILITY_RULES.len());
    }

    #[test]
    fn every_column_fits_in_padded_row() {
        let max = TRAIT_COLUMNS
            .iter()
            .map(|(c, _)| *c)
            .chain(AFFECT_COLUMNS.iter().map(|(c, _)| *c))
            .chain(ABILITY_RULES.iter().map(|r| r.column))
            .max()
            .unwrap();
        assert!(max < crate::data::row::MIN_ROW_WIDTH);
    }

    #[test]
    fn traits_require_exactly_one() {
        let row = row_with(&[(10, 1), (18, 2), (96, 1), (20, -1)]);
        assert_eq!(decode_traits(&row), vec![Trait::Red, Trait::Demon]);
    }

    #[test]
    fn affects_require_positive() {
        let row = row_with(&[(27, 30), (25, -1), (84, 1), (92, 5)]);
        assert_eq!(
            decode_affects(&row),
            vec![Affect::Slow, Affect::Curse, Affect::ImuAtk]
        );
    }

    #[test]
    fn mini_wave_suppresses_wave() {
        let row = row_with(&[(35, 20), (94, 20)]);
        let abilities = decode_abilities(&row);
        assert!(abilities.contains(&Ability::MiniWave));
        assert!(!abilities.contains(&Ability::Wave));

        let row = row_with(&[(35, 20)]);
        assert_eq!(decode_abilities(&row), vec![Ability::Wave]);
    }

    #[test]
    fn mini_volcano_suppresses_volcano() {
        let row = row_with(&[(86, 10), (108, 10)]);
        assert_eq!(decode_abilities(&row), vec![Ability::MiniVolcano]);

        let row = row_with(&[(86, 10)]);
        assert_eq!(decode_abilities(&row), vec![Ability::Volcano]);
    }

    #[test]
    fn non_numeric_mini_column_still_suppresses() {
        let row = row_with(&[(35, 5), (86, 5)])
            .with_non_numeric([MINI_WAVE_COLUMN, MINI_VOLCANO_COLUMN]);
        assert!(decode_abilities(&row).is_empty());
    }

    #[test]
    fn non_numeric_long_distance_counts_as_long() {
        let row = row_with(&[]).with_non_numeric([LONG_DISTANCE_COLUMN]);
        assert_eq!(decode_attack_types(&row), vec![AttackType::Long]);
    }

    #[test]
    fn non_numeric_flag_columns_never_add_tags() {
        let row = row_with(&[]).with_non_numeric([10, 12, 27, 40]);
        assert!(decode_traits(&row).is_empty());
        assert!(decode_affects(&row).is_empty());
        assert!(decode_abilities(&row).is_empty());
        assert_eq!(decode_attack_types(&row), vec![AttackType::Single]);
    }

    #[test]
    fn warp_column_feeds_both_affect_and_immunity() {
        let row = row_with(&[(75, 1)]);
        assert_eq!(decode_affects(&row), vec![Affect::Warp]);
        assert_eq!(decode_abilities(&row), vec![Ability::ImuWarp]);
    }

    #[test]
    fn attack_type_defaults_to_single() {
        assert_eq!(decode_attack_types(&row_with(&[])), vec![AttackType::Single]);
        assert_eq!(
            decode_attack_types(&row_with(&[(12, 2)])),
            vec![AttackType::Single]
        );
    }

    #[test]
    fn attack_type_combines_range_and_distance() {
        assert_eq!(
            decode_attack_types(&row_with(&[(12, 1), (45, 300)])),
            vec![AttackType::Range, AttackType::Long]
        );
        assert_eq!(
            decode_attack_types(&row_with(&[(45, -200)])),
            vec![AttackType::Omni]
        );
        assert_eq!(
            decode_attack_types(&row_with(&[(12, 1)])),
            vec![AttackType::Range]
        );
    }

    #[test]
    fn tags_serialize_to_consumer_strings() {
        let json = serde_json::to_string(&(
            Ability::StrikeAttack,
            Ability::ColossusSlayer,
            Ability::ImuKnockback,
            Ability::Lethal,
            Affect::ImuAtk,
            AttackType::Omni,
            Trait::Relic,
        ))
        .unwrap();
        assert_eq!(
            json,
            r#"["StrickAttack","ColosusSlayer","ImuKB","LETHAL","ImuATK","omni","Relic"]"#
        );
    }
}
