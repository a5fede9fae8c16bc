//! RISC-V Zba/Zbb/Zbs validation CLI.
//!
//! This binary provides a single entry point for the harness. It performs:
//! 1. **Run:** Execute the fixture groups in fixed order against the
//!    instruction backend (real hardware on RISC-V targets, the software
//!    model elsewhere).
//! 2. **List:** Print the instruction inventory and vector counts.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use zbcheck_core::config::{Config, FailurePolicy};
use zbcheck_core::fixtures::Group;
use zbcheck_core::runner::Runner;

#[derive(Parser, Debug)]
#[command(
    name = "zbcheck",
    author,
    version,
    about = "RISC-V Zba/Zbb/Zbs validation harness",
    long_about = "Execute the auto-generated bit-manipulation fixture tables and compare\neach hardware result against its precomputed expected value.\n\nRunning on a core without the relevant extension traps; that is a\ndeployment precondition, not something the harness detects.\n\nExamples:\n  zbcheck run\n  zbcheck run --group zba --group zbs --strict\n  zbcheck run --keep-going -c harness.json\n  zbcheck list"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the fixture groups in fixed order (Zba, Zbb, Zbs).
    Run {
        /// Keep running a group after a mismatch instead of aborting it.
        #[arg(long)]
        keep_going: bool,

        /// Exit with a failure status when any check failed.
        #[arg(long)]
        strict: bool,

        /// Restrict the run to a group (repeatable): zba, zbb-minmax,
        /// zbb-misc, zbs.
        #[arg(long = "group")]
        groups: Vec<String>,

        /// JSON configuration file; flags override its settings.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the instructions under test and their vector counts.
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            keep_going,
            strict,
            groups,
            config,
        }) => cmd_run(keep_going, strict, groups, config),
        Some(Commands::List) => cmd_list(),
        // Bare invocation behaves like `run` with defaults, matching the
        // original flat validation program.
        None => cmd_run(false, false, Vec::new(), None),
    }
}

/// Runs the harness: resolve config, sequence the groups, derive status.
///
/// By default the process exits successfully regardless of check outcomes
/// (pass/fail is read from the console); `--strict` turns any failed check
/// into exit code 1. Config or I/O problems exit with code 2.
fn cmd_run(keep_going: bool, strict: bool, groups: Vec<String>, config_path: Option<PathBuf>) {
    let mut config = config_path.map_or_else(Config::default, |path| {
        Config::from_json_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(2);
        })
    });
    if keep_going {
        config.on_failure = FailurePolicy::KeepGoing;
    }
    if strict {
        config.strict_status = true;
    }
    if !groups.is_empty() {
        config.groups = groups;
    }

    let selected = config.selected_groups().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  groups: zba, zbb-minmax, zbb-misc, zbs");
        process::exit(2);
    });

    let stdout = io::stdout();
    let mut runner = Runner::new(backend(), stdout.lock(), config.on_failure);
    let summary = runner.run(&selected).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    });

    if config.strict_status && !summary.all_passed() {
        eprintln!("{} check(s) FAILED", summary.checks_failed());
        process::exit(1);
    }
}

/// Prints the instruction inventory, grouped in execution order.
fn cmd_list() {
    for group in Group::ALL {
        println!("{} ({})", group.name(), group.title());
        for table in group.tables() {
            println!("  {:<8} {} vectors", table[0].op.as_str(), table.len());
        }
        println!();
    }
}

/// The instruction backend for this build: real bit-manipulation hardware
/// on RISC-V targets, the software model everywhere else.
#[cfg(target_arch = "riscv32")]
fn backend() -> zbcheck_core::exec::native::Native {
    zbcheck_core::exec::native::Native
}

#[cfg(not(target_arch = "riscv32"))]
fn backend() -> zbcheck_core::exec::Emulator {
    zbcheck_core::exec::Emulator
}
