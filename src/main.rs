//! lattice-vis: reduce, measure and export basis animations.
use clap::Parser; // trait import enables LatticeCli::parse()
use colored::Colorize;

use lattice_vis::cli::{Command, ConfigAction, LatticeCli};
use lattice_vis::commands;
use lattice_vis::config::{resolve_config_path, Config};
use lattice_vis::logging;

fn run(args: LatticeCli) -> anyhow::Result<()> {
    let cfg_path = resolve_config_path(&args.config);
    if let Command::Config { action: action @ ConfigAction::Init { .. } } = args.cmd {
        // a broken existing file must not block `config init --force`
        return commands::config::main(action, cfg_path, &Config::default());
    }
    let cfg = Config::load(cfg_path.as_deref())?;

    match args.cmd {
        Command::Reduce { source, delta, out } => commands::reduce::main(source, delta, out, &cfg),
        Command::Angles { source } => commands::angles::main(source, &cfg),
        Command::Resample { x, y, scale, method, with_x } => {
            commands::resample::main(x, y, scale, method, with_x, &cfg)
        }
        Command::Snapshot { source, out } => commands::snapshot::main(source, out, &cfg),
        Command::Frames { source, out } => commands::frames::main(source, out, &cfg),
        Command::Config { action } => commands::config::main(action, cfg_path, &cfg),
    }
}

fn main() {
    let args = LatticeCli::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(commands::exit_code_for(&e));
    }
}
