//! Constants used throughout the application.
//!
//! This module contains the constants used by metajournal, organized into
//! logical groups. Document text lives here so the builder, the interface and
//! the tests all agree on the exact wording.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "metajournal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A guided terminal form for daily and weekly journal entries";

// Logging Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level when a log file is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when logs would share the terminal with the interface.
pub const TERMINAL_LOG_LEVEL: &str = "error";

// Configuration Keys & Environment Variables
/// Environment variable selecting the base directory for saved entries.
pub const ENV_VAR_SAVE_PATH: &str = "METAJOURNAL_SAVE_PATH";
/// Base directory used when `METAJOURNAL_SAVE_PATH` is unset.
pub const DEFAULT_SAVE_PATH: &str = "./data/journal";

// File System Layout
/// Directory grouping entries by the Monday that starts their week.
pub const WEEK_DIR_NAME: &str = "week-beginning";
/// Suffix appended to `<date>_<entryType>` to form the file name.
pub const ENTRY_FILE_SUFFIX: &str = "_entry.md";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Document Text
/// Delimiter around the front-matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";
/// Top-level document title.
pub const DOCUMENT_TITLE: &str = "# Weekly Journal";
/// Line emitted under a heading whose section collected nothing.
pub const EMPTY_SECTION_LINE: &str = "* No items recorded";

// Interface Text
/// Title of the entry type selection list.
pub const SELECT_TITLE: &str = "Choose journal entry type";
/// Hint shown under the text input on every input step.
pub const INPUT_HINT: &str = "(Enter to add. Empty input to move to next step)";
/// Key hint shown on the preview screen.
pub const PREVIEW_HINT: &str = "[s] Save   [e] Edit   [q] Quit";
/// ASCII banner drawn at the top of every screen.
pub const BANNER: &str = r#"
#   __    __   ______  ______  ______         __   ______   __  __   ______   __   __   ______   __
#  /\ "-./  \ /\  ___\/\__  _\/\  __ \       /\ \ /\  __ \ /\ \/\ \ /\  == \ /\ "-.\ \ /\  __ \ /\ \
#  \ \ \-./\ \\ \  __\\/_/\ \/\ \  __ \     _\_\ \\ \ \/\ \\ \ \_\ \\ \  __< \ \ \-.  \\ \  __ \\ \ \____
#   \ \_\ \ \_\\ \_____\ \ \_\ \ \_\ \_\   /\_____\\ \_____\\ \_____\\ \_\ \_\\ \_\\"\_\\ \_\ \_\\ \_____\
#    \/_/  \/_/ \/_____/  \/_/  \/_/\/_/   \/_____/ \/_____/ \/_____/ \/_/ /_/ \/_/ \/_/ \/_/\/_/ \/_____/
"#;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "metajournal";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
