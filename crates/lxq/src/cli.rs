//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the lxq CLI.

use clap::{Parser, Subcommand, ValueEnum};

/// lxq - Translate LDAP filters into XPath resource queries
#[derive(Parser, Debug)]
#[command(name = "lxq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show the translation breakdown)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate an LDAP URL or filter into XPath filter text
    #[command(alias = "t")]
    Translate {
        /// LDAP URL (ldap://host/dn??sub?(filter)) or bare filter text
        input: String,

        /// Object type to scope the expression to
        #[arg(short = 't', long, env = "LXQ_OBJECT_TYPE", default_value = "*")]
        object_type: String,

        /// Dereference the named attribute of the matches
        #[arg(short, long)]
        dereference: Option<String>,

        /// Wrap the result in the enumeration Filter element
        #[arg(short, long)]
        wrap: bool,
    },

    /// Check whether an LDAP URL or filter parses
    #[command(alias = "c")]
    Check {
        /// LDAP URL or bare filter text
        input: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
