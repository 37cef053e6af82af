//! imgfeat CLI - image feature extraction, normalization, PCA and
//! benchmark plotting.
//!
//! Every flag defaults to the value in the loaded config (or the built-in
//! default), so running a subcommand without flags reproduces the standard
//! file layout: `media/` -> `dataset.csv` -> `normalized_dataset.csv` ->
//! `pca_0.8.csv`, and charts under `plot/`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use imgfeat_cli::{commands, settings};
use imgfeat_table::HeaderLayout;

/// imgfeat - Image Feature Pipeline
#[derive(Parser)]
#[command(name = "imgfeat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Pipeline config (JSON); explicit flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract 14 color/texture/intensity features from every image in a directory
    Extract {
        /// Directory of images [default: media]
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// Dataset CSV to write [default: dataset.csv]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Label columns to match their values instead of the legacy header
        #[arg(long)]
        corrected_header: bool,
    },

    /// Standardize every feature column to zero mean and unit variance
    Normalize {
        /// Dataset CSV to read [default: dataset.csv]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Normalized CSV to write [default: normalized_dataset.csv]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project the normalized table onto its principal components
    Reduce {
        /// Normalized CSV to read [default: normalized_dataset.csv]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fraction of variance to keep, in (0, 1] [default: 0.8]
        #[arg(long)]
        variance: Option<f64>,

        /// Reduced CSV to write [default: pca_<variance>.csv]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw KD-Tree vs VP-Tree benchmark charts
    Plot {
        /// KD-Tree results [default: resultados_experimentos_kdtree.csv]
        #[arg(long)]
        kd: Option<PathBuf>,

        /// VP-Tree results [default: resultados_experimentos_vptree.csv]
        #[arg(long)]
        vp: Option<PathBuf>,

        /// Directory for the chart PNGs [default: plot]
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Neighbour count to slice at [default: 1]
        #[arg(long)]
        k: Option<u32>,

        /// Output resolution [default: 300]
        #[arg(long)]
        dpi: Option<u32>,
    },

    /// Print mean search times of balanced vs unbalanced KD-Trees per dimension
    Summary {
        /// KD-Tree results [default: resultados_experimentos_kdtree.csv]
        #[arg(long)]
        kd: Option<PathBuf>,

        /// VP-Tree results [default: resultados_experimentos_vptree.csv]
        #[arg(long)]
        vp: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run extract, normalize and reduce in sequence
    Run,
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            input_dir,
            output,
            corrected_header,
        } => {
            let layout = if corrected_header {
                HeaderLayout::Corrected
            } else {
                config.header_layout
            };
            commands::extract::run(
                &input_dir.unwrap_or(config.media_dir),
                &output.unwrap_or(config.dataset_path),
                layout,
            )
        }
        Commands::Normalize { input, output } => commands::normalize::run(
            &input.unwrap_or(config.dataset_path),
            &output.unwrap_or(config.normalized_path),
        ),
        Commands::Reduce {
            input,
            variance,
            output,
        } => {
            let output = settings::reduced_output(&config, output, variance);
            commands::reduce::run(
                &input.unwrap_or(config.normalized_path),
                &output,
                variance.unwrap_or(config.variance_retained),
            )
        }
        Commands::Plot {
            kd,
            vp,
            out_dir,
            k,
            dpi,
        } => {
            let plot = &mut config.plot;
            if let Some(kd) = kd {
                plot.kd_path = kd;
            }
            if let Some(vp) = vp {
                plot.vp_path = vp;
            }
            if let Some(out_dir) = out_dir {
                plot.out_dir = out_dir;
            }
            if let Some(k) = k {
                plot.k = k;
            }
            if let Some(dpi) = dpi {
                plot.dpi = dpi;
            }
            config.validate()?;
            commands::plot::run(&config.plot)
        }
        Commands::Summary { kd, vp, output } => commands::summary::run(
            &kd.unwrap_or(config.plot.kd_path),
            &vp.unwrap_or(config.plot.vp_path),
            output.as_deref(),
        ),
        Commands::Run => commands::run::run(&config),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_extract_defaults() {
        let cli = Cli::try_parse_from(["imgfeat", "extract"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Extract {
                input_dir,
                output,
                corrected_header,
            } => {
                assert!(input_dir.is_none());
                assert!(output.is_none());
                assert!(!corrected_header);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_cli_parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["imgfeat", "run", "--config", "pipeline.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pipeline.json")));
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn test_cli_parses_reduce() {
        let cli = Cli::try_parse_from([
            "imgfeat",
            "reduce",
            "--variance",
            "0.95",
            "-i",
            "norm.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Reduce {
                input,
                variance,
                output,
            } => {
                assert_eq!(input, Some(PathBuf::from("norm.csv")));
                assert_eq!(variance, Some(0.95));
                assert!(output.is_none());
            }
            _ => panic!("expected reduce command"),
        }
    }

    #[test]
    fn test_cli_parses_plot() {
        let cli = Cli::try_parse_from([
            "imgfeat", "plot", "--kd", "kd.csv", "--vp", "vp.csv", "--dpi", "150", "--k", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Plot {
                kd,
                vp,
                out_dir,
                k,
                dpi,
            } => {
                assert_eq!(kd, Some(PathBuf::from("kd.csv")));
                assert_eq!(vp, Some(PathBuf::from("vp.csv")));
                assert!(out_dir.is_none());
                assert_eq!(k, Some(5));
                assert_eq!(dpi, Some(150));
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["imgfeat", "train"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
