//! Benchmark tables to charts and the text summary.

use std::fs;

use imgfeat_cli::commands;
use imgfeat_tests::PipelineHarness;
use pretty_assertions::assert_eq;

#[test]
fn plot_command_writes_all_comparison_charts() {
    let harness = PipelineHarness::new();
    let config = harness.add_benchmarks(30);

    commands::plot::run(&config).expect("plot should succeed");

    let mut names: Vec<String> = fs::read_dir(&config.out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 10);
    for stem in [
        "construccion_size",
        "memoria_size",
        "profundidad_size",
        "tiempo_knn_dim",
        "tiempo_nn_dim",
    ] {
        for key in ["balanceado", "desbalanceado"] {
            let name = format!("{}_kd_{}_vs_vp.png", stem, key);
            assert!(names.contains(&name), "missing {}", name);
        }
    }

    let img = image::open(config.out_dir.join("tiempo_nn_dim_kd_balanceado_vs_vp.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(img.dimensions(), (300, 180));
}

#[test]
fn missing_benchmark_file_is_an_error() {
    let harness = PipelineHarness::new();
    let mut config = harness.add_benchmarks(30);
    config.vp_path = harness.path().join("absent.csv");

    assert!(commands::plot::run(&config).is_err());
    assert!(!config.out_dir.exists());
}

#[test]
fn summary_command_writes_report() {
    let harness = PipelineHarness::new();
    let config = harness.add_benchmarks(30);
    let out = harness.path().join("summary.txt");

    commands::summary::run(&config.kd_path, &config.vp_path, Some(&out)).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("=== KD-TREE BENCHMARK SUMMARY ==="));
    // d=2 averages every row: balanced NN (100 + 80 + 100) / 3, unbalanced (150 + 110) / 2.
    assert!(text.contains("        2 |      93.33 |        130.00 |    28.2% |      80.00"));
    assert!(text.contains("        6 |     250.00 |        400.00 |    37.5% |     300.00"));
}
