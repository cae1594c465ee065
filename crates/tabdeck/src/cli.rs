use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck::Topic;

#[derive(Parser)]
#[command(name = "tabdeck")]
#[command(author, version, about)]
#[command(long_about = "A topic-tabbed slide presentation viewer.\n\n\
    Presents the built-in \"Modern Web Development\" deck: an introduction\n\
    followed by TypeScript, Accessibility and RxJS topics.\n\n\
    Examples:\n  \
    tabdeck                      Launch presentation (fullscreen)\n  \
    tabdeck --windowed           Launch in a window\n  \
    tabdeck --topic rxjs         Start at the first RxJS slide\n  \
    tabdeck outline --json       Print the slide outline as JSON")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start at the first slide of a topic (intro, typescript, accessibility, rxjs)
    #[arg(long, global = false)]
    pub topic: Option<Topic>,

    /// Start on a specific slide of the whole presentation (1-indexed)
    #[arg(long, global = false, conflicts_with = "topic")]
    pub slide: Option<usize>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every topic and slide title with its slide number
    Outline {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export slides as PNG images
    Export {
        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.theme, defaults.transition, defaults.start_topic)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Outline { json }) => crate::commands::outline::run(json),
            Some(Commands::Export {
                output_dir,
                width,
                height,
            }) => crate::commands::export::run(output_dir, width, height),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => crate::app::run(self.windowed, self.topic, self.slide),
        }
    }
}
