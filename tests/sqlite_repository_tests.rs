use chrono::NaiveDate;
use rtreports::core::add::AddLogic;
use rtreports::core::del::DeleteLogic;
use rtreports::core::reports::ReportsService;
use rtreports::core::repository::WorklogRepository;
use rtreports::db::initialize::init_db;
use rtreports::db::migrate::applied_migrations;
use rtreports::db::pool::DbPool;
use rtreports::db::queries::{load_log, load_worklogs};
use rtreports::db::stats::{collect_stats, integrity_problems};
use rtreports::errors::AppError;
use rtreports::models::day_status::DayStatus;
use rtreports::models::worklog::Worklog;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

fn add(pool: &DbPool, user: &str, day: NaiveDate, hours: i32) -> i32 {
    AddLogic::apply(&pool.conn, &Worklog::new(user, day, hours, "")).expect("add worklog")
}

#[test]
fn lookup_returns_only_the_requested_worker_and_day() {
    let pool = setup();
    let d = date(2025, 9, 1);

    add(&pool, "alice", d, 5);
    add(&pool, "alice", d, 2);
    add(&pool, "alice", date(2025, 9, 2), 8);
    add(&pool, "bob", d, 4);

    let found = pool.worklogs().find_by_username_and_date("alice", d).unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|w| w.username == "alice" && w.date == d));
    assert_eq!(found.iter().map(|w| w.duration).sum::<i32>(), 7);
}

#[test]
fn lookup_for_an_empty_day_returns_nothing() {
    let pool = setup();
    let found = pool
        .worklogs()
        .find_by_username_and_date("nobody", date(2025, 1, 1))
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn service_over_sqlite_classifies_each_scenario() {
    let pool = setup();
    let cases: [(&[i32], DayStatus); 6] = [
        (&[1], DayStatus::MissingHours),
        (&[5, 1, 1], DayStatus::MissingHours),
        (&[8], DayStatus::RightHours),
        (&[1, 6, 1], DayStatus::RightHours),
        (&[9], DayStatus::ExtraHours),
        (&[5, 2, 2], DayStatus::ExtraHours),
    ];

    for (i, (hours, _)) in cases.iter().enumerate() {
        for h in hours.iter() {
            add(&pool, "USU", date(2025, 3, i as u32 + 1), *h);
        }
    }

    let service = ReportsService::new(pool.worklogs());
    for (i, (_, expected)) in cases.iter().enumerate() {
        let d = date(2025, 3, i as u32 + 1);
        let summary = service
            .get_day_status_summary_for_worker_and_day("USU", d)
            .unwrap();
        assert_eq!(summary.status_list(), &[*expected]);
        assert_eq!(summary.date(), d);
        assert_eq!(summary.worker_username(), "USU");
    }
}

#[test]
fn negative_hours_are_rejected() {
    let pool = setup();
    let err = AddLogic::apply(&pool.conn, &Worklog::new("alice", date(2025, 9, 1), -1, ""))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(-1)));
}

#[test]
fn blank_worker_is_rejected() {
    let pool = setup();
    let err =
        AddLogic::apply(&pool.conn, &Worklog::new("  ", date(2025, 9, 1), 4, "")).unwrap_err();
    assert!(matches!(err, AppError::MissingWorker));
}

#[test]
fn delete_removes_the_worklog_and_changes_the_status() {
    let pool = setup();
    let d = date(2025, 9, 1);
    add(&pool, "alice", d, 8);
    let extra = add(&pool, "alice", d, 1);

    let service = ReportsService::new(pool.worklogs());
    assert_eq!(
        service
            .get_day_status_summary_for_worker_and_day("alice", d)
            .unwrap()
            .status_list(),
        &[DayStatus::ExtraHours]
    );

    let removed = DeleteLogic::apply(&pool.conn, extra).unwrap();
    assert_eq!(removed.duration, 1);

    assert_eq!(
        service
            .get_day_status_summary_for_worker_and_day("alice", d)
            .unwrap()
            .status_list(),
        &[DayStatus::RightHours]
    );
}

#[test]
fn deleting_an_unknown_worklog_fails() {
    let pool = setup();
    let err = DeleteLogic::apply(&pool.conn, 42).unwrap_err();
    assert!(matches!(err, AppError::WorklogNotFound(42)));
}

#[test]
fn load_worklogs_filters_by_user_and_range() {
    let pool = setup();
    add(&pool, "alice", date(2025, 8, 31), 3);
    add(&pool, "alice", date(2025, 9, 15), 4);
    add(&pool, "bob", date(2025, 9, 16), 5);

    let all = load_worklogs(&pool.conn, None, None).unwrap();
    assert_eq!(all.len(), 3);

    let alice_sept =
        load_worklogs(&pool.conn, Some("alice"), Some((date(2025, 9, 1), date(2025, 9, 30))))
            .unwrap();
    assert_eq!(alice_sept.len(), 1);
    assert_eq!(alice_sept[0].date, date(2025, 9, 15));
}

#[test]
fn migrations_are_recorded_and_idempotent() {
    let pool = setup();
    let first = applied_migrations(&pool.conn).unwrap();
    assert_eq!(
        first,
        vec![
            "20261001_0001_create_worklogs".to_string(),
            "20261001_0002_index_worklogs_user_date".to_string(),
        ]
    );

    init_db(&pool.conn).unwrap();
    assert_eq!(applied_migrations(&pool.conn).unwrap(), first);
}

#[test]
fn add_and_delete_are_audited_in_the_log_table() {
    let pool = setup();
    let id = add(&pool, "alice", date(2025, 9, 1), 2);
    DeleteLogic::apply(&pool.conn, id).unwrap();

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();

    assert_eq!(ops, vec!["add".to_string(), "del".to_string()]);
}

#[test]
fn stats_reflect_stored_worklogs() {
    let pool = setup();
    assert_eq!(collect_stats(&pool.conn).unwrap().worklogs, 0);

    add(&pool, "alice", date(2025, 9, 1), 2);
    add(&pool, "bob", date(2025, 9, 3), 2);

    let stats = collect_stats(&pool.conn).unwrap();
    assert_eq!(stats.worklogs, 2);
    assert_eq!(stats.workers, 2);
    assert_eq!(stats.first_date.as_deref(), Some("2025-09-01"));
    assert_eq!(stats.last_date.as_deref(), Some("2025-09-03"));
}

#[test]
fn a_fresh_database_has_no_integrity_problems() {
    let pool = setup();
    add(&pool, "alice", date(2025, 9, 1), 8);

    assert!(integrity_problems(&pool.conn).unwrap().is_empty());
}
