/*!
# Metajournal - A Guided Journal Form

Metajournal is an interactive terminal form for daily and weekly journal entries.
It collects items section by section, previews the result and writes it to
`<METAJOURNAL_SAVE_PATH>/week-beginning/<weekStart>/<date>_<type>_entry.md`.

## Usage

```
metajournal [OPTIONS]

Options:
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
      --log-level <LOG_LEVEL>    Log level filter (overridden by RUST_LOG)
      --log-file <LOG_FILE>      Write logs to this file instead of stderr
  -h, --help                     Print help
  -V, --version                  Print version
```

## Keys

- Enter: confirm the entry type, add an item, or (on an empty line) move on
- `s` / `e` / `q` on the preview: save, go back and add more, quit
- Ctrl+C: quit from anywhere without saving

## Configuration

- `METAJOURNAL_SAVE_PATH`: base directory for saved entries (defaults to `./data/journal`)
*/

use metajournal::cli::CliArgs;
use metajournal::config::Config;
use metajournal::constants::{
    DEFAULT_LOG_LEVEL, TERMINAL_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use metajournal::errors::{AppError, AppResult};
use metajournal::form::Control;
use metajournal::tui;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

/// The main entry point for the metajournal application.
///
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads configuration (once)
/// 4. Runs the interactive form until the user saves or quits
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing(&args)?;

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting metajournal");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;

    match tui::run(&config) {
        Ok(Control::Saved(path)) => {
            info!(path = %path.display(), "Entry saved");
            println!("Saved entry to {}", path.display());
            Ok(())
        }
        Ok(_) => {
            info!("Exited without saving");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Interactive session failed");
            Err(err)
        }
    }
}

/// Installs the global tracing subscriber.
///
/// With `--log-file`, events go to that file at the requested level. Without
/// it they share the terminal with the interface, so only errors are shown
/// unless `RUST_LOG` asks for more.
fn init_tracing(args: &CliArgs) -> AppResult<()> {
    let default_level = match (&args.log_level, &args.log_file) {
        (Some(level), _) => level.as_str(),
        (None, Some(_)) => DEFAULT_LOG_LEVEL,
        (None, None) => TERMINAL_LOG_LEVEL,
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", default_level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if args.json_logs() {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
        None => {
            let builder = builder.with_writer(std::io::stderr);
            if args.json_logs() {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
