//! Shell completion generation.

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Writes the completion script to stdout, with an install hint on
    /// stderr so piping the script somewhere stays clean.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        match self.shell {
            Shell::Bash => {
                eprintln!("# add to ~/.bashrc: eval \"$(usher completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("# usher completions zsh > ~/.zsh/completions/_usher");
                eprintln!("# (with ~/.zsh/completions in $fpath)");
            }
            Shell::Fish => {
                eprintln!("# usher completions fish > ~/.config/fish/completions/usher.fish");
            }
            // Remaining shells get the raw script without instructions
            _ => {}
        }

        generate(self.shell, &mut Cli::command(), "usher", &mut io::stdout());
        Ok(())
    }
}
