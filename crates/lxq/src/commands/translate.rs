//! Translate command implementation.
//!
//! Parses an LDAP URL or bare filter and prints the equivalent XPath
//! filter text.

use ldap_xpath_rs::{parse_filter, XPathDereferencedExpression};

use super::{CommandContext, Result};
use crate::output::{format_translation_details, format_translation_json, TranslationOutput};

/// Options for the translate command.
#[derive(Debug)]
pub struct TranslateOptions {
    /// LDAP URL or bare filter text.
    pub input: String,
    /// Object type to scope the expression to.
    pub object_type: String,
    /// Attribute to dereference the matches through.
    pub dereference: Option<String>,
    /// Whether to wrap the output in the enumeration Filter element.
    pub wrap: bool,
}

/// Result of a successful translation.
#[derive(Debug)]
pub struct TranslateResult {
    /// The input that was translated.
    pub input: String,
    /// The object type the expression is scoped to.
    pub object_type: String,
    /// The dereferenced attribute, if any.
    pub dereference: Option<String>,
    /// The rendered XPath filter text.
    pub xpath: String,
}

/// Translates the input into XPath filter text.
pub fn translate(opts: &TranslateOptions) -> Result<TranslateResult> {
    let expression = parse_filter(&opts.input)?
        .for_object_type(&opts.object_type)
        .wrap_in_filter_element(opts.wrap);

    let xpath = match &opts.dereference {
        Some(attribute) => XPathDereferencedExpression::new(expression, attribute)?.to_string(),
        None => expression.to_string(),
    };

    Ok(TranslateResult {
        input: opts.input.clone(),
        object_type: opts.object_type.clone(),
        dereference: opts.dereference.clone(),
        xpath,
    })
}

/// Executes the translate command.
///
/// # Arguments
///
/// * `ctx` - Command context with output settings
/// * `opts` - Translate options
///
/// # Errors
///
/// Returns an error if the input fails to parse or the dereference
/// attribute is not a valid schema identifier.
pub fn execute(ctx: &CommandContext, opts: &TranslateOptions) -> Result<()> {
    let result = translate(opts)?;
    let output = TranslationOutput::from_result(&result);

    if ctx.json_output {
        println!("{}", format_translation_json(&output)?);
    } else {
        if ctx.verbose && !ctx.quiet {
            print!("{}", format_translation_details(&output, ctx.use_colors));
        }
        println!("{}", result.xpath);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(input: &str) -> TranslateOptions {
        TranslateOptions {
            input: input.to_string(),
            object_type: "*".to_string(),
            dereference: None,
            wrap: false,
        }
    }

    #[test]
    fn test_translate_bare_filter() {
        let result = translate(&options("(cn=John)")).unwrap();
        assert_eq!(result.xpath, "/*[cn = 'John']");
        assert_eq!(result.input, "(cn=John)");
        assert_eq!(result.object_type, "*");
    }

    #[test]
    fn test_translate_url() {
        let result =
            translate(&options("ldap://localhost/dc=example??sub?(mail=*)")).unwrap();
        assert_eq!(result.xpath, "/*[mail]");
    }

    #[test]
    fn test_translate_with_object_type() {
        let mut opts = options("(cn=John)");
        opts.object_type = "Person".to_string();
        let result = translate(&opts).unwrap();
        assert_eq!(result.xpath, "/Person[cn = 'John']");
    }

    #[test]
    fn test_translate_with_dereference() {
        let mut opts = options("(DisplayName=Admins)");
        opts.object_type = "Group".to_string();
        opts.dereference = Some("ExplicitMember".to_string());
        let result = translate(&opts).unwrap();
        assert_eq!(result.xpath, "/Group[DisplayName = 'Admins']/ExplicitMember");
    }

    #[test]
    fn test_translate_wrapped() {
        let mut opts = options("(cn=John)");
        opts.wrap = true;
        let result = translate(&opts).unwrap();
        assert!(result.xpath.starts_with("<Filter xmlns="));
        assert!(result.xpath.ends_with("</Filter>"));
    }

    #[test]
    fn test_translate_parse_error() {
        let error = translate(&options("(cn=")).unwrap_err();
        assert!(error.to_string().contains("filter error"));
    }

    #[test]
    fn test_translate_bad_dereference_attribute() {
        let mut opts = options("(cn=John)");
        opts.dereference = Some("not valid".to_string());
        let error = translate(&opts).unwrap_err();
        assert!(error.to_string().contains("invalid name"));
    }
}
