//! Check command implementation.
//!
//! Parses the input and reports whether it is a valid LDAP filter,
//! without printing the translation unless asked.

use ldap_xpath_rs::parse_filter;

use super::{CommandContext, Result};
use crate::output::{format_check_json, format_check_ok};

/// Executes the check command.
///
/// # Arguments
///
/// * `ctx` - Command context with output settings
/// * `input` - LDAP URL or bare filter text
///
/// # Errors
///
/// Returns an error if the input fails to parse; the caller maps it to
/// a non-zero exit code.
pub fn execute(ctx: &CommandContext, input: &str) -> Result<()> {
    let expression = parse_filter(input)?;
    let xpath = expression.to_string();

    if ctx.json_output {
        println!("{}", format_check_json(&xpath)?);
    } else if !ctx.quiet {
        if ctx.verbose {
            println!("{}", format_check_ok(Some(&xpath), ctx.use_colors));
        } else {
            println!("{}", format_check_ok(None, ctx.use_colors));
        }
    }

    Ok(())
}
