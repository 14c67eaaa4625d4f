use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinyin_cli::commands::{config_ops, dict_ops, sim_ops};

#[derive(Parser)]
#[command(name = "kbdtool", about = "Pinyin keyboard diagnostics")]
struct Cli {
    /// Log engine activity to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a romanization key in the embedded dictionary
    Lookup {
        key: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a tap script and print what the keyboard emits
    ///
    /// Words tap each character; <space> <bs> <enter> <caps> <123> <lang>
    /// tap named keys; <esc> cancels; #N selects candidate N.
    Simulate {
        script: String,
        /// Start in Chinese mode
        #[arg(long)]
        chinese: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Dictionary table tools
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Settings tools
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum DictAction {
    /// Print the embedded dictionary TOML
    Export,
    /// Check a dictionary TOML file
    Validate { file: String },
    /// Summarize the embedded dictionary
    Stats,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Check a settings TOML file
    Validate { file: String },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "pinyin_core=debug,pinyin_session=debug,pinyin_keyboard=debug",
        _ => "pinyin_core=trace,pinyin_session=trace,pinyin_keyboard=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Lookup { key, json } => dict_ops::lookup(&key, json),
        Command::Simulate {
            script,
            chinese,
            json,
        } => sim_ops::simulate(&script, chinese, json),
        Command::Dict { action } => match action {
            DictAction::Export => config_ops::dict_export(),
            DictAction::Validate { file } => config_ops::dict_validate(&file),
            DictAction::Stats => config_ops::dict_stats(),
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
