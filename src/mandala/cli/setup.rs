use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use mandala::model::Variant;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "mandala",
    bin_name = "mandala",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Mandala chart goal board for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Grid variant to operate on: 3x3 or 9x9 (defaults to the configured one)
    #[arg(short = 'g', long = "variant", global = true, help_heading = "Options")]
    pub variant: Option<Variant>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the grid
    Show,

    /// Print full cards
    View {
        /// Cells: global index (17), section.card (1.8) or range (3-5)
        #[arg(required = true, num_args = 1..)]
        cells: Vec<String>,
    },

    /// Edit a cell in $EDITOR
    Edit {
        /// Cell: global index (17) or section.card (1.8)
        cell: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New background color (#rgb or #rrggbb)
        #[arg(long)]
        color: Option<String>,

        /// Apply the background color to every card of the section but its center
        #[arg(long = "sync-bg")]
        sync_bg: bool,

        /// Skip the editor and save the given fields directly
        #[arg(long)]
        no_editor: bool,
    },

    /// Swap two cells, as a drag from one dropped on the other
    Move {
        from: String,
        to: String,
    },

    /// Restore the default grid
    Reset,

    /// Show where the grid is stored
    Info,

    /// Get or set configuration
    Config {
        /// Configuration key
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },

    /// Create the data directory and a default config
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Grid,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Grid => "Grid Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "show" | "view" | "edit" | "move" | "reset" => Some(CommandGroup::Grid),
            "info" | "config" | "init" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Grid, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("mandala {version}\n"));
    output.push_str("Mandala chart goal board for the terminal\n");
    output.push('\n');
    output.push_str("Usage: mandala [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Cells:\n");
    output.push_str("  17           global index, 0-8 (3x3) or 0-80 (9x9)\n");
    output.push_str("  1.8          section.card\n");
    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --variant    Grid variant: 3x3 or 9x9\n");
    output.push_str("  -v, --verbose    Verbose output (repeat for more)\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::Show) => "show",
        Some(Commands::View { .. }) => "view",
        Some(Commands::Edit { .. }) => "edit",
        Some(Commands::Move { .. }) => "move",
        Some(Commands::Reset) => "reset",
        Some(Commands::Info) => "info",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Init) => "init",
        None => {
            print_grouped_help();
            return;
        }
    };

    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == subcommand_name {
            print!("{}", subcmd.render_help());
            return;
        }
    }
    print_grouped_help();
}
