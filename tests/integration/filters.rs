//! Equality filters, match modes, sorting and limits.

use crate::common::*;
use docstore::{Database, Filter, MatchMode, Value};

fn people(db: &Database) {
    for (name, status, role, age) in [
        ("Ada", "active", "admin", 37),
        ("Grace", "active", "user", 45),
        ("Linus", "inactive", "admin", 28),
        ("Ken", "inactive", "user", 52),
    ] {
        db.insert(
            "people",
            &doc(&[
                ("name", Value::from(name)),
                ("status", Value::from(status)),
                ("role", Value::from(role)),
                ("age", Value::Int(age)),
            ]),
        )
        .unwrap();
    }
}

fn names(records: &[docstore::Record]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.get("name").and_then(Value::as_str).unwrap_or("").to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_filter_selects_matching_status() {
    let db = ephemeral();
    db.insert("s", &doc(&[("status", Value::from("active"))])).unwrap();
    db.insert("s", &doc(&[("status", Value::from("inactive"))])).unwrap();

    let records = db.select("s", &Filter::new().eq("status", "active")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("status"), Some(&Value::from("active")));
}

#[test]
fn test_default_mode_is_any() {
    let db = ephemeral();
    people(&db);

    let filter = Filter::new().eq("status", "active").eq("role", "admin");
    assert_eq!(filter.mode, MatchMode::Any);
    let records = db.select("people", &filter).unwrap();
    assert_eq!(names(&records), vec!["Ada", "Grace", "Linus"]);
}

#[test]
fn test_all_mode_is_strict_and() {
    let db = ephemeral();
    people(&db);

    let filter = Filter::new()
        .eq("status", "active")
        .eq("role", "admin")
        .match_all();
    let records = db.select("people", &filter).unwrap();
    assert_eq!(names(&records), vec!["Ada"]);
}

#[test]
fn test_missing_field_never_matches() {
    let db = ephemeral();
    people(&db);
    db.insert("people", &doc(&[("name", Value::from("Anon"))])).unwrap();

    let records = db
        .select("people", &Filter::new().eq("status", "inactive"))
        .unwrap();
    assert_eq!(names(&records), vec!["Ken", "Linus"]);
}

#[test]
fn test_equality_is_type_strict() {
    let db = ephemeral();
    db.insert("t", &doc(&[("n", Value::Int(1))])).unwrap();
    db.insert("t", &doc(&[("n", Value::Float(1.0))])).unwrap();
    db.insert("t", &doc(&[("n", Value::from("1"))])).unwrap();

    for wanted in [Value::Int(1), Value::Float(1.0), Value::from("1")] {
        let records = db.select("t", &Filter::new().eq("n", wanted.clone())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("n"), Some(&wanted));
    }
}

#[test]
fn test_nan_matches_stored_nan() {
    let db = ephemeral();
    db.insert("f", &doc(&[("x", Value::Float(f64::NAN))])).unwrap();
    db.insert("f", &doc(&[("x", Value::Float(0.0))])).unwrap();

    let nan = db.select("f", &Filter::new().eq("x", f64::NAN)).unwrap();
    assert_eq!(nan.len(), 1);
    let neg_zero = db.select("f", &Filter::new().eq("x", -0.0)).unwrap();
    assert!(neg_zero.is_empty());
}

#[test]
fn test_no_match_returns_empty() {
    let db = ephemeral();
    people(&db);
    let records = db.select("people", &Filter::new().eq("name", "Nobody")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_sort_ascending_and_descending() {
    let db = ephemeral();
    people(&db);

    let asc = db.select("people", &Filter::new().sort_by("age")).unwrap();
    let ages: Vec<_> = asc.iter().map(|r| r.get("age").cloned().unwrap()).collect();
    assert_eq!(
        ages,
        vec![Value::Int(28), Value::Int(37), Value::Int(45), Value::Int(52)]
    );

    let desc = db.select("people", &Filter::new().sort_by_desc("age")).unwrap();
    let first = desc[0].get("name").and_then(Value::as_str);
    assert_eq!(first, Some("Ken"));
}

#[test]
fn test_sort_then_limit() {
    let db = ephemeral();
    people(&db);

    let filter = Filter::new().eq("status", "active").sort_by_desc("age").limit(1);
    let records = db.select("people", &filter).unwrap();
    assert_eq!(names(&records), vec!["Grace"]);
}

#[test]
fn test_limit_without_sort() {
    let db = ephemeral();
    people(&db);
    assert_eq!(db.select("people", &Filter::new().limit(3)).unwrap().len(), 3);
    assert_eq!(db.select("people", &Filter::new().limit(10)).unwrap().len(), 4);
    assert!(db.select("people", &Filter::new().limit(0)).unwrap().is_empty());
}
