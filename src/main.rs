//! boxscore - Box-score keeping from shorthand at-bat notation

mod config;

use anyhow::Context;
use boxscore_core::report::box_score_sheet;
use boxscore_core::storage::{write_csv, write_markdown};
use boxscore_core::{GameConfig, parse_notation, replay_game};
use config::{OutputFormat, load_user_config};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: boxscore [OPTIONS] [GAME]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [GAME]                    Game file to replay (.toml)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --parse <NOTATION>    Parse one at-bat notation and print its fields");
    eprintln!("  -o, --output <FILE>       Write the box score to a file instead of stdout");
    eprintln!("  --format <markdown|csv>   Box-score format (default: markdown)");
    eprintln!("  --no-user-config          Ignore ~/.config/boxscore/config.toml");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    game_file: Option<PathBuf>,
    notation: Option<String>,
    output_file: Option<PathBuf>,
    format: Option<OutputFormat>,
    user_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut opts = Options {
        game_file: None,
        notation: None,
        output_file: None,
        format: None,
        user_config: true,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-p" | "--parse" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --parse requires a notation");
                    std::process::exit(1);
                }
                opts.notation = Some(args[i].to_string());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                opts.output_file = Some(PathBuf::from(&args[i]));
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --format requires a value");
                    std::process::exit(1);
                }
                match OutputFormat::parse(&args[i]) {
                    Some(format) => opts.format = Some(format),
                    None => {
                        eprintln!("Error: Unknown format: {}", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            "--no-user-config" => opts.user_config = false,
            arg if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if opts.game_file.is_none() {
                    opts.game_file = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Some(notation) = opts.notation.as_deref() {
        for (name, value) in parse_notation(notation).describe() {
            println!("{}={}", name, value);
        }
        return;
    }

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: Options) -> anyhow::Result<()> {
    let Some(game_file) = opts.game_file else {
        print_usage();
        anyhow::bail!("no game file given");
    };

    let mut format = opts.format;
    if format.is_none() && opts.user_config {
        let (user, warnings) = load_user_config();
        for warning in warnings {
            warn!("{}", warning);
        }
        format = user.format;
    }
    let format = format.unwrap_or_default();

    let game = GameConfig::load(&game_file)
        .with_context(|| format!("loading {}", game_file.display()))?;
    let score = game
        .open_score_sheet()
        .with_context(|| format!("reading {}", game.sheet_path.display()))?;
    let replay = replay_game(&score, &game.roster)?;

    let mut out: Box<dyn Write> = match &opts.output_file {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    match format {
        OutputFormat::Markdown => write_markdown(&mut out, &replay, &game.roster)?,
        OutputFormat::Csv => {
            let sheet = box_score_sheet(&replay, &game.roster);
            if let Some(bounds) = sheet.bounds() {
                write_csv(&mut out, &sheet.read_region(&bounds))?;
            }
        }
    }
    out.flush()?;

    if let Some(path) = &opts.output_file {
        eprintln!("Box score written to {}", path.display());
    }
    Ok(())
}
