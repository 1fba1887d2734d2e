//! Tests for concurrent acquisition and writes.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::{FileWriterRegistry, InMemoryFileBackend, LINE_ENDING, LogWriter};

const THREADS: usize = 16;

#[test]
fn concurrent_first_acquire_constructs_once() {
    let backend = InMemoryFileBackend::new();
    let registry = Arc::new(FileWriterRegistry::new(Arc::new(backend.clone())));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.acquire("race.log").unwrap()
            })
        })
        .collect();

    let writers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(backend.truncate_count("race.log"), 1);
    assert!(writers.iter().all(|w| Arc::ptr_eq(w, &writers[0])));
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_writes_to_one_writer_produce_whole_lines() {
    let backend = InMemoryFileBackend::new();
    let registry = Arc::new(FileWriterRegistry::new(Arc::new(backend.clone())));
    let per_thread = 50;

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let writer = registry.acquire("shared.log").unwrap();
                for i in 0..per_thread {
                    writer.write_message(&format!("t{t}-{i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = backend.contents("shared.log").unwrap();
    let lines: Vec<&str> = contents
        .split(LINE_ENDING)
        .filter(|l| !l.is_empty())
        .collect();

    assert_eq!(lines.len(), THREADS * per_thread);
    assert!(lines.iter().all(|l| l.starts_with('t') && l.contains('-')));
    assert_eq!(backend.truncate_count("shared.log"), 1);
}

#[test]
fn writers_for_different_paths_are_independent() {
    let backend = InMemoryFileBackend::new();
    let registry = Arc::new(FileWriterRegistry::new(Arc::new(backend.clone())));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let path = format!("worker-{t}.log");
                let writer = registry.acquire(&path).unwrap();
                for i in 0..10 {
                    writer.write_warning(&i.to_string()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 4);
    for t in 0..4 {
        let path = format!("worker-{t}.log");
        assert_eq!(backend.truncate_count(&path), 1);
        assert_eq!(backend.append_count(&path), 10);
    }
}
