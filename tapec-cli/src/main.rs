//! `tapec` - compile tape machine programs from the command line

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tapec_codegen::{compile, Target};
use tapec_frontend::Source;
use tapec_ir::{EmitterConfig, TapeMode, DEFAULT_PROGRAM_NAME, DEFAULT_TAPE_SIZE};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tapec",
    version,
    about = "Compile tape machine programs to C, C++, Rust, Python, Pascal, QBasic or JavaScript"
)]
struct Cli {
    /// Source file, or `-` to read standard input
    #[arg(required_unless_present = "list_targets")]
    input: Option<PathBuf>,

    /// Target language (see --list-targets)
    #[arg(short, long, default_value = "c")]
    target: Target,

    /// Write the generated source to this file instead of stdout
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write `<input stem>.<ext>` into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Tape representation: dynamic or fixed
    #[arg(long, default_value = "dynamic")]
    tape: TapeMode,

    /// Cell count for a fixed tape
    #[arg(long, default_value_t = DEFAULT_TAPE_SIZE)]
    tape_size: usize,

    /// Name of the generated program unit
    #[arg(long, default_value = DEFAULT_PROGRAM_NAME)]
    name: String,

    /// Print the supported targets and exit
    #[arg(long)]
    list_targets: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            program_name: self.name.clone(),
            tape_mode: self.tape,
            tape_size: self.tape_size,
        }
    }

    /// Where the generated source goes; `None` means stdout
    fn destination(&self, input: &Path) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }
        let dir = self.output_dir.as_ref()?;
        let stem = if is_stdin(input) {
            self.name.as_str()
        } else {
            input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(self.name.as_str())
        };
        Some(dir.join(format!("{}.{}", stem, self.target.extension())))
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if is_stdin(input) {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read standard input")?;
        Ok(bytes)
    } else {
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))
    }
}

fn list_targets() {
    for target in Target::ALL {
        println!("{:<8} .{}", target.name(), target.extension());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_targets {
        list_targets();
        return Ok(());
    }

    let input = cli.input.as_deref().context("no input file given")?;
    let bytes = read_input(input)?;
    debug!(input = %input.display(), bytes = bytes.len(), "read source");

    let config = cli.emitter_config();
    let code = compile(cli.target, Source::Bytes(&bytes), Some(&config))
        .with_context(|| format!("failed to compile {} to {}", input.display(), cli.target))?;

    match cli.destination(input) {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(&path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), target = %cli.target, "wrote generated source");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
