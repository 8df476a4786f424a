use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lattice-vis",
    about = "LLL-reduce integer bases and export the data behind the reduction animation",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct LatticeCli {
    /// Global: path to config (TOML); default: ~/.lattice_vis/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug-level diagnostics on stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Where a basis comes from: a file, or the `[basis]` config section.
#[derive(Debug, Clone, Args)]
pub struct BasisSource {
    /// Basis file (.json array of rows, or text with one row per line)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seed for the generated basis (overrides basis.seed)
    #[arg(long = "seed", value_name = "N", conflicts_with = "input")]
    pub seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// LLL-reduce a basis and print it
    ///
    /// Examples:
    ///   lattice-vis reduce -i basis.txt --delta 0.75
    ///   lattice-vis reduce --seed 7 -o reduced.json
    Reduce {
        #[command(flatten)]
        source: BasisSource,

        /// Lovász constant (overrides reduction.delta)
        #[arg(long = "delta", value_name = "D")]
        delta: Option<f64>,

        /// Also write the reduced basis as JSON
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Angles between each vector and its complementary subspace (square bases)
    Angles {
        #[command(flatten)]
        source: BasisSource,
    },

    /// Resample y(x) on an even grid with a cubic spline
    Resample {
        /// Comma-separated x coordinates, strictly increasing
        #[arg(long = "x", value_name = "LIST", value_delimiter = ',', allow_hyphen_values = true, required = true)]
        x: Vec<f64>,

        /// Comma-separated y values
        #[arg(long = "y", value_name = "LIST", value_delimiter = ',', allow_hyphen_values = true, required = true)]
        y: Vec<f64>,

        /// Number of output samples (overrides display.scale)
        #[arg(long = "scale", value_name = "N")]
        scale: Option<usize>,

        /// Interpolation method tag (only "cubicspline")
        #[arg(long = "method", value_name = "TAG")]
        method: Option<String>,

        /// Print "x y" pairs instead of y alone
        #[arg(long = "with-x", action = ArgAction::SetTrue)]
        with_x: bool,
    },

    /// Reduce, measure angles and resample curves; emit everything as JSON
    Snapshot {
        #[command(flatten)]
        source: BasisSource,

        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Emit every blended animation frame as JSON
    Frames {
        #[command(flatten)]
        source: BasisSource,

        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write the default config to the resolved path
    Init {
        /// Overwrite an existing file
        #[arg(long = "force", action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        LatticeCli::command().debug_assert();
    }

    #[test]
    fn test_parse_resample_lists() {
        let cli = LatticeCli::parse_from([
            "lattice-vis", "resample", "--x", "1,2,3", "--y", "-1,0.5,2", "--scale", "4",
        ]);
        match cli.cmd {
            Command::Resample { x, y, scale, method, with_x } => {
                assert_eq!(x, vec![1.0, 2.0, 3.0]);
                assert_eq!(y, vec![-1.0, 0.5, 2.0]);
                assert_eq!(scale, Some(4));
                assert!(method.is_none());
                assert!(!with_x);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
