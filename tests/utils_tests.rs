use chrono::NaiveDate;
use rtreports::config::Config;
use rtreports::core::config::ConfigLogic;
use rtreports::errors::AppError;
use rtreports::utils::date::{dates_between, parse_date, resolve_period, today};
use rtreports::utils::table::{Table, visible_len};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parse_date_accepts_iso_and_today() {
    assert_eq!(parse_date("2025-09-01").unwrap(), date(2025, 9, 1));
    assert_eq!(parse_date("today").unwrap(), today());
    assert!(matches!(parse_date("01/09/2025"), Err(AppError::InvalidDate(_))));
}

#[test]
fn resolve_period_single_tokens() {
    assert_eq!(
        resolve_period("2025-09-15").unwrap(),
        (date(2025, 9, 15), date(2025, 9, 15))
    );
    assert_eq!(
        resolve_period("2024-02").unwrap(),
        (date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        resolve_period("2025-12").unwrap(),
        (date(2025, 12, 1), date(2025, 12, 31))
    );
    assert_eq!(
        resolve_period("2025").unwrap(),
        (date(2025, 1, 1), date(2025, 12, 31))
    );
}

#[test]
fn resolve_period_ranges() {
    assert_eq!(
        resolve_period("2024-09:2025-09").unwrap(),
        (date(2024, 9, 1), date(2025, 9, 30))
    );
    assert_eq!(
        resolve_period("2024:2025-01-10").unwrap(),
        (date(2024, 1, 1), date(2025, 1, 10))
    );
}

#[test]
fn resolve_period_rejects_garbage_and_reversed_ranges() {
    assert!(matches!(resolve_period("soon"), Err(AppError::InvalidPeriod(_))));
    assert!(matches!(
        resolve_period("2025-09:2025-01"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn dates_between_is_inclusive() {
    let days = dates_between(date(2025, 2, 27), date(2025, 3, 1));
    assert_eq!(days, vec![date(2025, 2, 27), date(2025, 2, 28), date(2025, 3, 1)]);
}

#[test]
fn config_from_yaml_uses_defaults_for_optional_keys() {
    let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.default_worker, None);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn config_from_yaml_defaults_missing_database() {
    let cfg = Config::from_yaml("default_worker: alice\n").unwrap();
    assert_eq!(cfg.database, Config::database_file().to_string_lossy());
    assert_eq!(cfg.default_worker.as_deref(), Some("alice"));
}

#[test]
fn config_from_yaml_rejects_invalid_documents() {
    assert!(matches!(
        Config::from_yaml("database: [not, a, path]\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn resolve_worker_prefers_explicit_then_default() {
    let mut cfg = Config::from_yaml("database: db.sqlite\ndefault_worker: alice\n").unwrap();

    assert_eq!(cfg.resolve_worker(Some(&"bob".to_string())).unwrap(), "bob");
    assert_eq!(cfg.resolve_worker(None).unwrap(), "alice");

    cfg.default_worker = None;
    assert!(matches!(cfg.resolve_worker(None), Err(AppError::MissingWorker)));
}

#[test]
fn missing_config_keys_are_reported() {
    let missing = ConfigLogic::missing_keys("database: db.sqlite\n").unwrap();
    assert_eq!(missing, vec!["default_worker", "separator_char"]);

    let complete =
        ConfigLogic::missing_keys("database: a\ndefault_worker: b\nseparator_char: '='\n").unwrap();
    assert!(complete.is_empty());
}

#[test]
fn table_aligns_columns_ignoring_ansi_codes() {
    let mut t = Table::new(&["A", "B"]);
    t.add_row(vec!["\x1b[31mred\x1b[0m".to_string(), "x".to_string()]);
    t.add_row(vec!["long".to_string(), "y".to_string()]);

    let rendered = t.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "A    B ");
    assert_eq!(lines[2], "long y ");
    assert!(lines[1].ends_with("red\x1b[0m  x "));
}

#[test]
fn table_measures_wide_characters_by_display_width() {
    let mut t = Table::new(&["WORKER", "HOURS"]);
    t.add_row(vec!["田中太郎".to_string(), "8h".to_string()]);
    t.add_row(vec!["bob".to_string(), "8h".to_string()]);

    let rendered = t.render();
    let lines: Vec<&str> = rendered.lines().collect();

    // 田中太郎 spans 8 terminal columns, so HOURS starts at column 9 everywhere.
    assert_eq!(lines[0], "WORKER   HOURS ");
    assert_eq!(lines[1], "田中太郎 8h    ");
    assert_eq!(lines[2], "bob      8h    ");
    assert_eq!(visible_len(lines[1]), visible_len(lines[2]));
}
