//! Integration tests for the truth-table dump

use lattice_ae::{write_truth_table, InteractionObjective, Objective};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn open_count(decisions: &[bool]) -> f64 {
    decisions.iter().filter(|&&open| open).count() as f64
}

#[test]
fn test_dump_to_file() {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    write_truth_table(&open_count, 3, temp.as_file_mut()).expect("Failed to write truth table");
    temp.flush().expect("Failed to flush temp file");

    let content = fs::read_to_string(temp.path()).expect("Failed to read temp file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "0 0 0 0");
    assert_eq!(lines[7], "1 1 1 3");
}

#[test]
fn test_dump_covers_every_vector_once() {
    let objective = InteractionObjective::new(4, 1);
    let mut out = Vec::new();
    write_truth_table(&objective, 4, &mut out).unwrap();

    let content = String::from_utf8(out).unwrap();
    let mut seen: Vec<String> = content
        .lines()
        .map(|line| line.rsplit_once(' ').unwrap().0.to_string())
        .collect();
    assert_eq!(seen.len(), 16);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 16);
}

#[test]
fn test_dump_profits_match_direct_evaluation() {
    let objective = InteractionObjective::new(3, 5);
    let mut out = Vec::new();
    write_truth_table(&objective, 3, &mut out).unwrap();

    for line in String::from_utf8(out).unwrap().lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 4);
        let decisions: Vec<bool> = fields[..3].iter().map(|&field| field == "1").collect();
        let profit: f64 = fields[3].parse().unwrap();
        assert_eq!(profit, objective.evaluate(&decisions));
    }
}
