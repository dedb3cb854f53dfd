//! LS-8 virtual machine CLI.
//!
//! This binary loads one `.ls8` program source, runs it to completion, and
//! reports faults. It performs:
//! 1. **Argument parsing:** Exactly one positional program path, plus
//!    optional trace, step-limit, and configuration flags.
//! 2. **Loading:** Text source to byte image via the core loader.
//! 3. **Execution:** Run loop until `HLT` or a fatal error; on error the
//!    machine state is dumped before exiting non-zero.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::sim::loader;
use ls8_core::{Config, Cpu};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "LS-8 microcomputer emulator",
    long_about = "Run an LS-8 program source.\n\nThe source is line-oriented text: one binary byte per line, '#' starts a comment, blank lines are skipped.\n\nExamples:\n  ls8 demos/print8.ls8\n  ls8 --trace demos/mult.ls8\n  ls8 --max-steps 10000 demos/call.ls8"
)]
struct Cli {
    /// Program source file (`.ls8` text, one binary byte per line).
    program: PathBuf,

    /// Emit a trace event per executed instruction (to stderr).
    #[arg(short, long)]
    trace: bool,

    /// Stop with an error after N instructions (0 = unlimited).
    #[arg(long)]
    max_steps: Option<u64>,

    /// JSON configuration file (fields default when absent).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = cli
        .config
        .as_deref()
        .map_or_else(Config::default, load_config);
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if let Some(limit) = cli.max_steps {
        config.general.max_steps = limit;
    }

    let image = match loader::read_program(&cli.program) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    };

    let mut cpu = Cpu::new(&config);
    if let Err(e) = cpu.load_program(&image) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }

    if let Err(e) = cpu.run() {
        eprintln!("\n[!] FATAL: {e}");
        cpu.dump_state();
        process::exit(1);
    }
}

/// Reads and deserializes a JSON configuration file.
///
/// Exits the process with an error message when the file is unreadable or
/// invalid.
fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path.display(), e);
        process::exit(1);
    })
}

/// Installs the tracing subscriber on stderr.
///
/// `--trace` forces the `trace` level for the core crate; otherwise the
/// filter comes from `RUST_LOG` (default `info`). Program output from `PRN`
/// goes to stdout and is never mixed with trace output.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("ls8_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
