//! Identical inputs give identical outputs.

use std::collections::BTreeMap;

use imgfeat_cli::commands;
use imgfeat_table::read_table_file;
use imgfeat_tests::fixtures::{gradient_image, noise_image};
use imgfeat_tests::{hash_tree, PipelineHarness};
use pretty_assertions::assert_eq;

fn rows_by_id(path: &std::path::Path) -> BTreeMap<String, Vec<u64>> {
    let table = read_table_file(path).unwrap();
    table
        .iter()
        .map(|(id, values)| (id.to_string(), values.iter().map(|v| v.to_bits()).collect()))
        .collect()
}

fn run_once() -> (PipelineHarness, imgfeat_table::PipelineConfig) {
    let harness = PipelineHarness::new();
    harness.add_image("a.png", &noise_image(20, 20, 1));
    harness.add_image("b.png", &noise_image(20, 20, 2));
    harness.add_image("c.png", &gradient_image(20, 12));
    harness.add_image("d.png", &noise_image(12, 30, 3));
    let config = harness.config();
    commands::run::run(&config).unwrap();
    (harness, config)
}

#[test]
fn pipeline_tables_are_reproducible() {
    let (_first, a) = run_once();
    let (_second, b) = run_once();

    // Directory order is not fixed, so compare keyed by id.
    assert_eq!(rows_by_id(&a.dataset_path), rows_by_id(&b.dataset_path));
    assert_eq!(rows_by_id(&a.normalized_path), rows_by_id(&b.normalized_path));

    let reduced_a = read_table_file(&a.reduced_path()).unwrap();
    let reduced_b = read_table_file(&b.reduced_path()).unwrap();
    assert_eq!(reduced_a.columns(), reduced_b.columns());
}

#[test]
fn charts_are_byte_identical() {
    let first = PipelineHarness::new();
    let second = PipelineHarness::new();
    let config_a = first.add_benchmarks(25);
    let config_b = second.add_benchmarks(25);

    commands::plot::run(&config_a).unwrap();
    commands::plot::run(&config_b).unwrap();

    let a = hash_tree(&config_a.out_dir);
    assert_eq!(a.len(), 10);
    assert_eq!(a, hash_tree(&config_b.out_dir));
}
