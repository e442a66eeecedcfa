//! Assemble enemy records from the stats, name and description files.
//! Every call re-reads all three files; nothing is cached between calls.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::data::config::EnemyDataPaths;
use crate::data::enemy::Enemy;
use crate::data::error::{LoadError, LoadResult};
use crate::data::row::parse_row;
use crate::data::text_table::{load_enemy_descriptions, load_enemy_names, read_normalized};

/// A stats field with no leading integer, loaded as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub enemy_id: usize,
    pub column: usize,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub enemies: Vec<Enemy>,
    pub issues: Vec<FieldIssue>,
    /// Enemies that found an entry in the name table.
    pub named: usize,
    /// Enemies that found an entry in the description table.
    pub described: usize,
}

/// Load every enemy from the default paths.
pub fn load_all_enemies() -> LoadResult<Vec<Enemy>> {
    load_enemies(&EnemyDataPaths::default())
}

pub fn load_enemies(paths: &EnemyDataPaths) -> LoadResult<Vec<Enemy>> {
    load_all_enemies_with_report(paths).map(|report| report.enemies)
}

/// Load every enemy and keep track of the fields that had to be coerced.
/// Any unreadable file fails the whole load.
pub fn load_all_enemies_with_report(paths: &EnemyDataPaths) -> LoadResult<LoadReport> {
    let names = load_enemy_names(&paths.names)?;
    let descriptions = load_enemy_descriptions(&paths.descriptions)?;
    let stats = read_normalized(&paths.stats)?;

    let mut report = LoadReport {
        enemies: Vec::new(),
        issues: Vec::new(),
        named: 0,
        described: 0,
    };

    let lines = stats.split('\n').filter(|line| !line.trim().is_empty());
    for (id, line) in lines.enumerate() {
        let (row, coerced) = parse_row(line).map_err(|source| LoadError::Csv {
            path: paths.stats.clone(),
            line: id,
            source,
        })?;

        for field in coerced {
            debug!(
                enemy_id = id,
                column = field.column,
                raw = %field.raw,
                "non-numeric stats field loaded as 0"
            );
            report.issues.push(FieldIssue {
                enemy_id: id,
                column: field.column,
                raw: field.raw,
            });
        }

        let name = names.get(&id).map(String::as_str);
        let description = descriptions.get(&id).map(String::as_str);
        report.named += usize::from(name.is_some());
        report.described += usize::from(description.is_some());

        report
            .enemies
            .push(Enemy::from_row(id, &row, name, description));
    }

    if report.enemies.is_empty() {
        warn!(path = %paths.stats.display(), "stats file has no enemy rows");
    }
    info!(
        enemies = report.enemies.len(),
        named = report.named,
        described = report.described,
        issues = report.issues.len(),
        "loaded enemy data"
    );

    Ok(report)
}
