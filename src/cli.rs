use std::fmt;
use std::path::Path;

use crate::data::{
    find_enemy, load_all_enemies_with_report, load_enemies, Enemy, EnemyDataPaths, LoadReport,
};

const USAGE: &str = "usage: enemydex <list|show|check> [args]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Check,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("list") => Some(Command::List),
        Some("show") => Some(Command::Show),
        Some("check") => Some(Command::Check),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::List) => handle_list(args),
        Some(Command::Show) => handle_show(args),
        Some(Command::Check) => handle_check(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

/// Data directory from a positional argument, else `data/` under the working directory.
fn data_paths(raw: Option<&String>) -> EnemyDataPaths {
    match raw {
        Some(dir) => EnemyDataPaths::in_dir(Path::new(dir)),
        None => EnemyDataPaths::default(),
    }
}

fn positional(args: &[String], from: usize) -> Vec<&String> {
    args.iter()
        .skip(from)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

fn handle_list(args: &[String]) -> i32 {
    let as_table = args.iter().any(|arg| arg == "--table");
    let paths = data_paths(positional(args, 2).first().copied());

    let enemies = match load_enemies(&paths) {
        Ok(enemies) => enemies,
        Err(err) => {
            eprintln!("load failed: {err}");
            return 1;
        }
    };

    if as_table {
        println!("id\tname\thp\tatk\trange\tattack_type\ttargets");
        for enemy in &enemies {
            println!("{}", table_row(enemy));
        }
        return 0;
    }

    print_json(&enemies)
}

fn handle_show(args: &[String]) -> i32 {
    let rest = positional(args, 2);
    let Some(raw_id) = rest.first() else {
        eprintln!("usage: enemydex show <id> [data-dir]");
        return 2;
    };
    let Ok(id) = raw_id.parse::<usize>() else {
        eprintln!("invalid id '{raw_id}'");
        return 2;
    };

    let enemies = match load_enemies(&data_paths(rest.get(1).copied())) {
        Ok(enemies) => enemies,
        Err(err) => {
            eprintln!("load failed: {err}");
            return 1;
        }
    };

    match find_enemy(&enemies, id) {
        Some(enemy) => print_json(enemy),
        None => {
            eprintln!("no enemy with id {id} ({} loaded)", enemies.len());
            1
        }
    }
}

fn handle_check(args: &[String]) -> i32 {
    let paths = data_paths(positional(args, 2).first().copied());
    match load_all_enemies_with_report(&paths) {
        Ok(report) => {
            print_check_summary(&report);
            0
        }
        Err(err) => {
            eprintln!("load failed: {err}");
            1
        }
    }
}

fn print_check_summary(report: &LoadReport) {
    println!(
        "check complete: enemies={}, named={}, described={}, coerced_fields={}",
        report.enemies.len(),
        report.named,
        report.described,
        report.issues.len()
    );
    for issue in &report.issues {
        println!(
            "- enemy {} column {}: '{}' loaded as 0",
            issue.enemy_id, issue.column, issue.raw
        );
    }
}

fn join_tags<T: fmt::Display>(tags: &[T]) -> String {
    tags.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn table_row(enemy: &Enemy) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        enemy.id,
        enemy.name,
        enemy.hp,
        enemy.atk,
        enemy.range,
        join_tags(&enemy.attack_type),
        join_tags(&enemy.targets),
    )
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize enemies: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command(&args(&["enemydex", "list"])), Some(Command::List));
        assert_eq!(parse_command(&args(&["enemydex", "show", "3"])), Some(Command::Show));
        assert_eq!(parse_command(&args(&["enemydex", "check"])), Some(Command::Check));
        assert_eq!(parse_command(&args(&["enemydex", "serve"])), None);
        assert_eq!(parse_command(&args(&["enemydex"])), None);
    }

    #[test]
    fn data_paths_default_to_data_dir() {
        assert_eq!(data_paths(None), EnemyDataPaths::default());
        let dir = "fixtures".to_string();
        assert_eq!(data_paths(Some(&dir)), EnemyDataPaths::in_dir("fixtures"));
    }

    #[test]
    fn positional_skips_flags() {
        let argv = args(&["enemydex", "list", "--table", "fixtures"]);
        let rest = positional(&argv, 2);
        assert_eq!(rest, vec![&"fixtures".to_string()]);
    }
}
