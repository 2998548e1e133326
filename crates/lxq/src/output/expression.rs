//! Translation output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::translate::TranslateResult;

/// JSON output structure for the translate command.
#[derive(Serialize)]
pub struct TranslationOutput<'a> {
    pub input: &'a str,
    pub object_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dereference: Option<&'a str>,
    pub xpath: &'a str,
}

impl<'a> TranslationOutput<'a> {
    /// Creates the output view of a translation result.
    pub fn from_result(result: &'a TranslateResult) -> Self {
        Self {
            input: &result.input,
            object_type: &result.object_type,
            dereference: result.dereference.as_deref(),
            xpath: &result.xpath,
        }
    }
}

fn label(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Formats a translation as JSON.
pub fn format_translation_json(output: &TranslationOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(output)
}

/// Formats the verbose breakdown printed above the filter text.
pub fn format_translation_details(output: &TranslationOutput, use_colors: bool) -> String {
    let mut details = String::new();

    details.push_str(&format!("{} {}\n", label("Input:", use_colors), output.input));
    details.push_str(&format!(
        "{} {}\n",
        label("Object type:", use_colors),
        output.object_type
    ));
    if let Some(dereference) = output.dereference {
        details.push_str(&format!(
            "{} {}\n",
            label("Dereference:", use_colors),
            dereference
        ));
    }

    details
}

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub status: &'static str,
    pub xpath: &'a str,
}

/// Formats a successful check as JSON.
pub fn format_check_json(xpath: &str) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        status: "ok",
        xpath,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a successful check as text, with the translation included
/// when requested.
pub fn format_check_ok(xpath: Option<&str>, use_colors: bool) -> String {
    let status = if use_colors {
        "ok".green().to_string()
    } else {
        "ok".to_string()
    };

    match xpath {
        Some(xpath) => format!("{status} {xpath}"),
        None => status,
    }
}
