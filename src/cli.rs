// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands, their aliases and arguments.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dx")]
#[command(about = "Compact listings of containers, images and volumes")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Show more detail; repeat to stop shortening columns
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List containers
    #[command(visible_aliases = ["c", "containers"])]
    Ps {
        /// Include stopped containers
        #[arg(short, long)]
        all: bool,
    },

    /// List images
    #[command(visible_aliases = ["i", "imgs"])]
    Images {
        /// Include intermediate images
        #[arg(short, long)]
        all: bool,
    },

    /// List volumes
    #[command(visible_aliases = ["v", "vols"])]
    Volumes,

    /// Show the full record of a container, image or volume
    #[command(visible_aliases = ["x", "inspect"])]
    Examine {
        /// ID, name, or volume name prefix
        target: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aliases_select_subcommands() {
        let cli = Cli::try_parse_from(["dx", "c", "-a"]).unwrap();
        assert!(matches!(cli.command, Commands::Ps { all: true }));

        let cli = Cli::try_parse_from(["dx", "imgs"]).unwrap();
        assert!(matches!(cli.command, Commands::Images { all: false }));

        let cli = Cli::try_parse_from(["dx", "vols"]).unwrap();
        assert!(matches!(cli.command, Commands::Volumes));

        let cli = Cli::try_parse_from(["dx", "inspect", "web"]).unwrap();
        assert!(matches!(cli.command, Commands::Examine { ref target } if target == "web"));
    }

    #[test]
    fn verbose_counts_before_and_after_subcommand() {
        let cli = Cli::try_parse_from(["dx", "-v", "ps", "-v"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn examine_requires_exactly_one_target() {
        assert!(Cli::try_parse_from(["dx", "x"]).is_err());
        assert!(Cli::try_parse_from(["dx", "x", "a", "b"]).is_err());
    }

    #[test]
    fn listings_reject_positional_arguments() {
        assert!(Cli::try_parse_from(["dx", "ps", "extra"]).is_err());
        assert!(Cli::try_parse_from(["dx", "volumes", "extra"]).is_err());
    }
}
