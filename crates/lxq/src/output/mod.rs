//! Output formatting utilities for the lxq CLI.
//!
//! This module provides functions for formatting translation results as
//! text or JSON.

mod expression;

pub use expression::{
    format_check_json, format_check_ok, format_translation_details, format_translation_json,
    CheckOutput, TranslationOutput,
};
