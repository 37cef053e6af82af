//! Synthetic inputs: images and benchmark result tables.

use image::{Rgb, RgbImage};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random RGB noise.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = Pcg32::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| Rgb([rng.gen(), rng.gen(), rng.gen()]))
}

/// Horizontal hue sweep with a vertical brightness ramp.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 255 - r])
    })
}

/// Alternating black and white squares of `cell` pixels.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

/// Bytes that start like a JPEG but cannot be decoded.
pub const CORRUPT_JPEG: &[u8] = b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00 cut short";

/// KD-Tree results: two dimensionalities at two sizes, both categories,
/// plus a `k = 5` row that the charts must ignore.
pub const KD_RESULTS_CSV: &str = "\
dimensiones,datos_entrenamiento,datos_busqueda,k_vecinos,tipo_arbol,tiempo_construccion_ns,tiempo_insercion_total_ns,tiempo_busqueda_nn_total_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_total_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,factor_balance,memoria_estimada_kb
2,1000,100,1,balanceado,50000,0,10000,100,30000,300,10,1.0,40
6,1000,100,1,balanceado,52000,0,25000,250,60000,600,10,1.0,80
2,1000,100,1,desbalanceado,40000,0,15000,150,35000,350,31,0.3,40
6,1000,100,1,desbalanceado,41000,0,40000,400,90000,900,33,0.3,80
2,250,100,1,balanceado,11000,0,8000,80,24000,240,8,1.0,10
2,250,100,1,desbalanceado,9000,0,11000,110,28000,280,22,0.3,10
2,1000,100,5,balanceado,50000,0,10000,100,70000,700,10,1.0,40
";

/// VP-Tree results, with extra columns the plotter ignores.
pub const VP_RESULTS_CSV: &str = "\
dimensiones,datos_entrenamiento,datos_busqueda,k_vecinos,tiempo_construccion_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,memoria_estimada_kb,tasa_poda,radio_particion
2,1000,100,1,80000,90,250,14,55,0.6,0.4
6,1000,100,1,81000,300,700,15,110,0.4,0.7
2,250,100,1,20000,70,200,11,14,0.6,0.4
";
