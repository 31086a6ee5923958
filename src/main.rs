//! CLI entry point for dirscan

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirscan::{
    DEFAULT_OUTPUT_FILE, OutputConfig, TreeFormatter, build_tree, print_json,
    prompt_for_path, resolve_path, save_report, validate_path,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirscan")]
#[command(about = "Scan a directory tree and save it as an indented text report")]
#[command(version)]
struct Args {
    /// Directory to scan (prompts on stdin when omitted)
    path: Option<String>,

    /// File the formatted tree is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Print the tree as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let raw = match &args.path {
        Some(p) => p.clone(),
        None => {
            let stdin = io::stdin();
            prompt_for_path(&mut stdin.lock(), &mut io::stdout()).unwrap_or_else(|e| {
                eprintln!("dirscan: cannot read input: {}", e);
                process::exit(1);
            })
        }
    };
    let path = resolve_path(&raw);

    if let Err(e) = validate_path(&path) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let tree = build_tree(&path).unwrap_or_else(|e| {
        eprintln!("dirscan: error scanning '{}': {}", path.display(), e);
        process::exit(1);
    });

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });

    let printed = if args.json {
        print_json(&tree)
    } else {
        formatter.print(&tree)
    };
    if let Err(e) = printed {
        eprintln!("dirscan: error writing output: {}", e);
        process::exit(1);
    }

    if let Err(e) = save_report(&args.output, &formatter.format(&tree)) {
        eprintln!("dirscan: {}", e);
        process::exit(1);
    }
    println!("\nStructure has been saved to {}", args.output.display());
}
