//! Plotting synthetic benchmark tables into a directory.

use std::fs;

use imgfeat_plot::{
    category_charts, plot_all, plot_benchmarks, BalanceCategory, BenchmarkData, Point, TreeKind,
};
use imgfeat_table::PlotConfig;
use pretty_assertions::assert_eq;

const KD_CSV: &str = "\
dimensiones,datos_entrenamiento,datos_busqueda,k_vecinos,tipo_arbol,tiempo_construccion_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,factor_balance,memoria_estimada_kb
2,1000,100,1,balanceado,5000,100,300,10,1.0,40
4,1000,100,1,balanceado,5200,180,500,10,1.0,60
8,1000,100,1,balanceado,5400,400,900,10,1.0,100
2,1000,100,1,desbalanceado,4000,150,350,30,0.3,40
4,1000,100,1,desbalanceado,4100,260,600,31,0.3,60
8,1000,100,1,desbalanceado,4300,700,1500,33,0.3,100
2,500,100,1,balanceado,2400,80,240,9,1.0,20
2,500,100,1,desbalanceado,2000,110,280,25,0.3,20
2,1000,100,5,balanceado,5000,100,999,10,1.0,40
";

const VP_CSV: &str = "\
dimensiones,datos_entrenamiento,datos_busqueda,k_vecinos,tiempo_construccion_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,memoria_estimada_kb,tasa_poda,radio_particion
2,1000,100,1,8000,90,250,14,55,0.6,0.4
4,1000,100,1,8100,140,420,14,75,0.5,0.6
8,1000,100,1,8300,350,800,15,120,0.3,0.9
2,500,100,1,3900,70,200,12,28,0.6,0.4
";

fn write_inputs(dir: &std::path::Path) -> PlotConfig {
    let kd_path = dir.join("resultados_experimentos_kdtree.csv");
    let vp_path = dir.join("resultados_experimentos_vptree.csv");
    fs::write(&kd_path, KD_CSV).unwrap();
    fs::write(&vp_path, VP_CSV).unwrap();
    PlotConfig {
        kd_path,
        vp_path,
        out_dir: dir.join("plot"),
        k: 1,
        dpi: 40,
    }
}

#[test]
fn nn_vs_dimension_chart_matches_filtered_slice() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path());
    let data = BenchmarkData::load(&config.kd_path, &config.vp_path).unwrap();

    let charts = category_charts(&data, 1, BalanceCategory::Balanced);
    let nn = &charts[0];
    assert_eq!(nn.file_name, "tiempo_nn_dim_kd_balanceado_vs_vp.png");
    assert_eq!(nn.series.len(), 2);
    assert_eq!(nn.series[0].label, TreeKind::Kd.label());
    assert_eq!(
        nn.series[0].points,
        vec![
            Point { x: 2.0, y: 100.0 },
            Point { x: 4.0, y: 180.0 },
            Point { x: 8.0, y: 400.0 },
        ]
    );
    assert_eq!(nn.series[1].label, TreeKind::Vp.label());
    assert_eq!(
        nn.series[1].points,
        vec![
            Point { x: 2.0, y: 90.0 },
            Point { x: 4.0, y: 140.0 },
            Point { x: 8.0, y: 350.0 },
        ]
    );

    let depth = &category_charts(&data, 1, BalanceCategory::Unbalanced)[2];
    assert_eq!(depth.file_name, "profundidad_size_kd_desbalanceado_vs_vp.png");
    assert_eq!(
        depth.series[0].points,
        vec![Point { x: 500.0, y: 25.0 }, Point { x: 1000.0, y: 30.0 }]
    );
}

#[test]
fn all_ten_charts_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path());
    assert!(!config.out_dir.exists());

    let written = plot_benchmarks(&config).unwrap();
    assert_eq!(written.len(), 10);
    for chart in &written {
        assert!(chart.path.starts_with(&config.out_dir));
        let bytes = fs::read(&chart.path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(chart.hash.len(), 64);
    }

    let again = plot_benchmarks(&config).unwrap();
    assert_eq!(written, again);
}

#[test]
fn empty_tables_still_write_every_chart() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plot");
    let written = plot_all(&BenchmarkData::default(), &out, 1, 40).unwrap();
    assert_eq!(written.len(), 10);
    for chart in &written {
        assert!(chart.path.is_file());
        assert!(chart.path.starts_with(&out));
    }
}
