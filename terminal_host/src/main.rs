//! # NullOS Host Daemon
//!
//! Main entry point for the NullOS terminal host.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use terminal_host::{HostRuntime, HostRuntimeConfig};
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_LOG_FILTER: &str = "warn";

struct Options {
    runtime: HostRuntimeConfig,
    log_level: Option<String>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nullosd");

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    init_logging(options.log_level.as_deref());

    let system = options.runtime.load_system().unwrap_or_else(|e| {
        eprintln!("Failed to load system document: {}", e);
        process::exit(1);
    });

    let mut runtime = HostRuntime::new(options.runtime, &system).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = runtime.run(stdin.lock(), &mut stdout) {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

/// Sends tracing output to stderr so it never mixes with terminal output
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        runtime: HostRuntimeConfig::default(),
        log_level: None,
    };
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                options.runtime.config_path = Some(PathBuf::from(&args[i]));
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                options.runtime.script = Some(script_text);
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                options.runtime.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--log-level" | "-l" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --log-level".to_string());
                }
                options.log_level = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage(args.first().map(String::as_str).unwrap_or("nullosd"));
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      System document (default: built-in NullOS)");
    eprintln!("  -s, --script <FILE>      Input script file (default: read stdin)");
    eprintln!("  --max-steps <N>          Maximum lines to submit (0 = unlimited)");
    eprintln!("  -l, --log-level <FILTER> Log filter, e.g. debug (default: RUST_LOG or warn)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script terminal_host/scripts/walkthrough.nsh", program);
    eprintln!("  {} --config my_system.json --log-level debug", program);
}
