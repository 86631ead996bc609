//! Concurrent use of one database handle.

use crate::common::*;
use docstore::{Filter, Value};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_inserts_are_all_visible() {
    let test_db = TestDb::new_fast();
    let threads = 8;
    let per_thread = 25;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let db = Arc::clone(&test_db.db);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    let fields = doc(&[
                        ("thread", Value::Int(t as i32)),
                        ("i", Value::Int(i)),
                    ]);
                    db.insert("shared", &fields).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(test_db.db.count("shared").unwrap(), threads * per_thread as usize);
    for t in 0..threads {
        let records = test_db
            .db
            .select("shared", &Filter::new().eq("thread", t as i32))
            .unwrap();
        assert_eq!(records.len(), per_thread as usize);
    }
}

#[test]
fn test_readers_see_whole_records_during_writes() {
    let test_db = TestDb::new_fast();
    test_db.db.create_collection("pairs").unwrap();
    let writer_db = Arc::clone(&test_db.db);
    let reader_db = Arc::clone(&test_db.db);

    let writer = thread::spawn(move || {
        for i in 0..100 {
            let fields = doc(&[("a", Value::Int(i)), ("b", Value::Int(i))]);
            writer_db.insert("pairs", &fields).unwrap();
        }
    });
    let reader = thread::spawn(move || {
        for _ in 0..50 {
            for record in reader_db.select("pairs", &Filter::new()).unwrap() {
                assert_eq!(record.fields.len(), 2);
                assert_eq!(record.get("a"), record.get("b"));
            }
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(test_db.db.count("pairs").unwrap(), 100);
}
