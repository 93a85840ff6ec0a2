use metadata_sync::editor::METADATA_ATTRIBUTE;
use metadata_sync::storage::Storage;
use metadata_sync::{Container, Editor, FieldCollection, SessionStorage, SyncConfig};
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: sync-metadata <to-basic|to-advanced> --basic <file> --advanced <file> \
                     [--sub <id>] [--config <yaml>]";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    ToBasic,
    ToAdvanced,
}

struct Args {
    direction: Direction,
    basic: String,
    advanced: String,
    sub: Option<String>,
    config: Option<String>,
}

fn parse_args() -> Result<Args, ExitCode> {
    let args: Vec<String> = env::args().collect();
    let mut direction: Option<Direction> = None;
    let mut basic: Option<String> = None;
    let mut advanced: Option<String> = None;
    let mut sub: Option<String> = None;
    let mut config: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--version" => {
                println!("sync-metadata {}", env!("CARGO_PKG_VERSION"));
                return Err(ExitCode::SUCCESS);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Err(ExitCode::SUCCESS);
            }
            flag @ ("--basic" | "--advanced" | "--sub" | "--config") => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: {flag} requires a value");
                    return Err(ExitCode::from(1));
                }
                let value = Some(args[i].clone());
                match flag {
                    "--basic" => basic = value,
                    "--advanced" => advanced = value,
                    "--sub" => sub = value,
                    _ => config = value,
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: unknown flag {arg}");
                return Err(ExitCode::from(1));
            }
            "to-basic" => direction = Some(Direction::ToBasic),
            "to-advanced" => direction = Some(Direction::ToAdvanced),
            other => {
                eprintln!("Error: unknown command {other}");
                eprintln!("{USAGE}");
                return Err(ExitCode::from(1));
            }
        }
        i += 1;
    }

    let (Some(direction), Some(basic), Some(advanced)) = (direction, basic, advanced) else {
        eprintln!("{USAGE}");
        return Err(ExitCode::from(1));
    };

    Ok(Args {
        direction,
        basic,
        advanced,
        sub,
        config,
    })
}

fn read(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))
}

fn run(args: &Args) -> Result<String, String> {
    let config = match &args.config {
        Some(path) => SyncConfig::load(Path::new(path)).map_err(|e| format!("{path}: {e}"))?,
        None => SyncConfig::default(),
    };
    let transcript_key = config.transcript_key.clone();

    let basic_json = read(&args.basic)?;
    let container = Container::new("basic_metadata_edit").with_attribute(METADATA_ATTRIBUTE, &basic_json);
    let mut storage = SessionStorage::new();
    if let Some(sub) = &args.sub {
        storage.set(&transcript_key, sub);
    }
    let mut editor =
        Editor::with_config(container, storage, config).map_err(|e| format!("{}: {e}", args.basic))?;

    let mut advanced = FieldCollection::from_metadata(read(&args.advanced)?)
        .map_err(|e| format!("{}: {e}", args.advanced))?;

    let output = match args.direction {
        Direction::ToBasic => {
            editor.sync_basic_tab(Some(&advanced), None);
            let (basic, _) = editor.into_parts();
            serde_json::to_string_pretty(&basic)
        }
        Direction::ToAdvanced => {
            editor.sync_advanced_tab(Some(&mut advanced));
            serde_json::to_string_pretty(&advanced)
        }
    };
    output.map_err(|e| format!("failed to serialize result: {e}"))
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(code) => return code,
    };

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
