use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"tzclock renders a live clock for a timezone of your choice.

Running tzclock with no subcommand opens the interactive view: a clock
ticking once per second at the top, and below it a picker listing every
IANA timezone, grouped by its current UTC offset.

KEYS:
    Up/Down        move between timezones (group labels are skipped)
    PgUp/PgDn      move a page at a time
    Home/End       jump to the first / last timezone
    Enter          select the timezone under the cursor
    q, Esc, Ctrl+C quit

EXAMPLES:
    # Clock in the host timezone
    tzclock

    # Start on a specific timezone, with the labeled picker
    tzclock --zone Asia/Kolkata --style labeled

    # Dump the offset grouping without the UI
    tzclock zones
    tzclock zones --format json"#;

#[derive(Parser)]
#[command(name = "tzclock")]
#[command(author, version)]
#[command(about = "Live terminal clock with an IANA timezone picker grouped by UTC offset")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Initial timezone as an IANA identifier (default: the host timezone)
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Picker presentation; cosmetic only
    #[arg(long, default_value = "plain")]
    pub style: PickerStyle,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print all timezones grouped by their current UTC offset
    #[command(name = "zones")]
    Zones {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// How the picker is dressed up. `Labeled` adds a "Time Zone" heading
/// above the list; behavior is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PickerStyle {
    Plain,
    Labeled,
}
