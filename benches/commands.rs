//! Benchmarks for command parsing and execution.

use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termpad::command::{execute, parse};
use termpad::note::Note;

fn notes(count: usize) -> Vec<Note> {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let mut note = Note::new(format!("note {i}"), now);
            note.content = "line of text\n".repeat(20);
            note
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_save_with_name", |b| {
        b.iter(|| parse(black_box(":save  meeting notes for monday  ")).unwrap())
    });
}

fn bench_execute_list(c: &mut Criterion) {
    let notes = notes(500);
    let command = parse(":list").unwrap();
    let now = Utc::now();
    c.bench_function("execute_list_500", |b| {
        b.iter(|| execute(black_box(&command), &notes, None, now))
    });
}

fn bench_execute_save(c: &mut Criterion) {
    let notes = notes(500);
    let current = Note::new("note 250", Utc::now());
    let command = parse(":save").unwrap();
    let now = Utc::now();
    c.bench_function("execute_save_overwrite_500", |b| {
        b.iter(|| execute(black_box(&command), &notes, Some(&current), now))
    });
}

criterion_group!(benches, bench_parse, bench_execute_list, bench_execute_save);
criterion_main!(benches);
