// Idiomatic Rust CLI for frontcode.
//
// Uses explicit subcommands and long-form options while preserving
// the underlying encode/decode/verify word-list workflow.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::engine::{self, Mode};
use crate::front::record::{RefRecord, SeqRecord};
use crate::verify;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Front coding (incremental encoding) for sorted word lists.
#[derive(Parser, Debug)]
#[command(
    name = "frontcode",
    version,
    about = "Front coding compressor for sorted word lists",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Front-code a word list.
    Encode(CodecArgs),
    /// Reconstruct a word list from front-coded records.
    Decode(CodecArgs),
    /// Round-trip a word list in memory and compare.
    Verify(FileArgs),
    /// Parse a front-coded file and print a per-record table.
    Inspect(FileArgs),
    /// Print build/configuration details.
    Config,
}

/// Reference strategy for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Each line references the immediately preceding line.
    Sequential,
    /// Each line references whichever prior line shares the longest prefix.
    BestMatch,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Sequential => Mode::Sequential,
            ModeArg::BestMatch => Mode::BestMatch,
        }
    }
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// Reference strategy.
    #[arg(short = 'm', long, value_enum, default_value_t = ModeArg::Sequential)]
    mode: ModeArg,

    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FileArgs {
    /// Reference strategy.
    #[arg(short = 'm', long, value_enum, default_value_t = ModeArg::Sequential)]
    mode: ModeArg,

    /// Input file.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    Verify,
    Inspect,
    Config,
}

struct Options {
    command: Command,
    mode: Mode,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let force = cli.force;
    let json_output = cli.json_output;

    match cli.command {
        Cmd::Encode(args) => Options {
            command: Command::Encode,
            mode: args.mode.into(),
            use_stdout: args.stdout,
            force,
            quiet,
            verbose,
            input_file: args.input.or(args.input_pos),
            output_file: args.output.or(args.output_pos),
            json_output,
        },
        Cmd::Decode(args) => Options {
            command: Command::Decode,
            mode: args.mode.into(),
            use_stdout: args.stdout,
            force,
            quiet,
            verbose,
            input_file: args.input.or(args.input_pos),
            output_file: args.output.or(args.output_pos),
            json_output,
        },
        Cmd::Verify(args) => Options {
            command: Command::Verify,
            mode: args.mode.into(),
            use_stdout: false,
            force,
            quiet,
            verbose,
            input_file: Some(args.input),
            output_file: None,
            json_output,
        },
        Cmd::Inspect(args) => Options {
            command: Command::Inspect,
            mode: args.mode.into(),
            use_stdout: false,
            force,
            quiet,
            verbose,
            input_file: Some(args.input),
            output_file: None,
            json_output,
        },
        Cmd::Config => Options {
            command: Command::Config,
            mode: Mode::default(),
            use_stdout: false,
            force,
            quiet,
            verbose,
            input_file: None,
            output_file: None,
            json_output,
        },
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("frontcode".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Input/output plumbing
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(opts: &Options, text: &str) -> i32 {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = out.write_all(text.as_bytes()) {
                eprintln!("frontcode: write error: {e}");
                return 1;
            }
        }
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                eprintln!(
                    "frontcode: output file exists, use -f to overwrite: {}",
                    path.display()
                );
                return 1;
            }
            if let Err(e) = std::fs::write(path, text) {
                eprintln!("frontcode: output file: {}: {e}", path.display());
                return 1;
            }
        }
    }
    0
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("frontcode version {version} (Rust), Copyright (C) frontcode contributors");
    eprintln!("Licensed under the MIT license");

    let file_io = cfg!(feature = "file-io") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("FILE_IO={file_io}");
    eprintln!("DEFAULT_MODE={}", Mode::default());
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let text = match read_input(opts.input_file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("frontcode: input: {e}");
            return 1;
        }
    };

    let lines = engine::split_lines(&text).len();
    let encoded = engine::compress(&text, opts.mode);

    let code = write_output(opts, &encoded);
    if code != 0 {
        return code;
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "frontcode: encoder: mode: {}, input size: {}, output size: {}, lines: {lines}",
            opts.mode,
            text.len(),
            encoded.len()
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "encode",
            "mode": opts.mode.to_string(),
            "input_size": text.len(),
            "output_size": encoded.len(),
            "lines": lines,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    0
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(opts: &Options) -> i32 {
    let text = match read_input(opts.input_file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("frontcode: input: {e}");
            return 1;
        }
    };

    let records = engine::split_lines(&text).len();
    let restored = match engine::decompress(&text, opts.mode) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("frontcode: decode error: {e}");
            return 1;
        }
    };

    let code = write_output(opts, &restored);
    if code != 0 {
        return code;
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "frontcode: decoder: mode: {}, input size: {}, output size: {}, records: {records}",
            opts.mode,
            text.len(),
            restored.len()
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "decode",
            "mode": opts.mode.to_string(),
            "input_size": text.len(),
            "output_size": restored.len(),
            "records": records,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    0
}

// ---------------------------------------------------------------------------
// Verify command
// ---------------------------------------------------------------------------

fn cmd_verify(opts: &Options) -> i32 {
    let input_file = match &opts.input_file {
        Some(path) => path.clone(),
        None => {
            eprintln!("frontcode: verify requires an input file");
            return 1;
        }
    };

    let text = match std::fs::read_to_string(&input_file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("frontcode: {}: {e}", input_file.display());
            return 1;
        }
    };

    let encoded = engine::compress(&text, opts.mode);
    let restored = match engine::decompress(&encoded, opts.mode) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("frontcode: decode error: {e}");
            return 1;
        }
    };

    let comparison = verify::compare(&text, &restored);
    let lines = engine::split_lines(&text).len();

    let code = if comparison.is_match() {
        if !opts.quiet {
            println!("original size:   {}", text.len());
            println!("compressed size: {}", encoded.len());
            println!("lines:           {lines}");
        }
        0
    } else {
        eprintln!("frontcode: verify failed: {comparison}");
        1
    };

    if opts.json_output {
        let json = serde_json::json!({
            "command": "verify",
            "mode": opts.mode.to_string(),
            "input_size": text.len(),
            "compressed_size": encoded.len(),
            "lines": lines,
            "match": comparison.is_match(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    code
}

// ---------------------------------------------------------------------------
// Inspect command
// ---------------------------------------------------------------------------

fn cmd_inspect(opts: &Options) -> i32 {
    let input_file = match &opts.input_file {
        Some(path) => path.clone(),
        None => {
            eprintln!("frontcode: inspect requires an input file");
            return 1;
        }
    };

    let text = match std::fs::read_to_string(&input_file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("frontcode: {}: {e}", input_file.display());
            return 1;
        }
    };

    let record_lines = engine::split_lines(&text);

    match opts.mode {
        Mode::Sequential => {
            println!("  Record Shared Suffix");
            for (index, line) in record_lines.iter().enumerate() {
                match line.parse::<SeqRecord>() {
                    Ok(rec) => println!("  {index:6} {:6} {:?}", rec.shared, rec.suffix),
                    Err(e) => {
                        eprintln!("frontcode: record {index}: {e}");
                        return 1;
                    }
                }
            }
        }
        Mode::BestMatch => {
            println!("  Record   Dist Shared Suffix");
            for (index, line) in record_lines.iter().enumerate() {
                match line.parse::<RefRecord>() {
                    Ok(rec) => println!(
                        "  {index:6} {:6} {:6} {:?}",
                        rec.distance, rec.shared, rec.suffix
                    ),
                    Err(e) => {
                        eprintln!("frontcode: record {index}: {e}");
                        return 1;
                    }
                }
            }
        }
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!("frontcode: inspect: {} records", record_lines.len());
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    // Warn if -c overrides output filename.
    if opts.use_stdout && opts.output_file.is_some() && !opts.quiet {
        eprintln!(
            "frontcode: warning: -c option overrides output filename: {}",
            opts.output_file.as_ref().unwrap().display()
        );
        opts.output_file = None;
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::Verify => cmd_verify(&opts),
        Command::Inspect => cmd_inspect(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
