//! Shell completions command implementation.
//!
//! Generate shell completions for bash, zsh, fish, and powershell.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell as ClapShell};

use crate::cli::{Cli, Shell};

fn clap_shell(shell: &Shell) -> ClapShell {
    match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::Powershell => ClapShell::PowerShell,
    }
}

/// Generate shell completions for the given shell and write to stdout.
///
/// # Arguments
///
/// * `shell` - The shell to generate completions for
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn execute(shell: &Shell) -> io::Result<()> {
    let mut cmd = Cli::command();
    generate(clap_shell(shell), &mut cmd, "lxq", &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_mapping() {
        assert!(matches!(clap_shell(&Shell::Bash), ClapShell::Bash));
        assert!(matches!(clap_shell(&Shell::Zsh), ClapShell::Zsh));
        assert!(matches!(clap_shell(&Shell::Fish), ClapShell::Fish));
        assert!(matches!(
            clap_shell(&Shell::Powershell),
            ClapShell::PowerShell
        ));
    }

    #[test]
    fn test_cli_command_builds() {
        // generate() walks the full command tree; make sure it is valid
        Cli::command().debug_assert();
    }
}
