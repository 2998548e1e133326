//! Parser for LDAP search filters carried in `ldap://` URLs.
//!
//! This module turns the filter grammar of legacy directory clients into
//! [`XPathExpression`](crate::xpath::XPathExpression) trees in the
//! resource management service's XPath dialect.
//!
//! # Supported Syntax
//!
//! ## Comparisons
//! - `(attr=value)` - Equality
//! - `(attr>value)`, `(attr>=value)` - Greater than (or equals)
//! - `(attr<value)`, `(attr<=value)` - Less than (or equals)
//! - `(attr=*)` - Presence test
//!
//! ## Negation
//! - `(!(attr=value))` - Not equals
//! - `(!(attr=*))` - Absence test
//!
//! ## Boolean Groups
//! - `(&(..)(..))` - AND of the sub-filters
//! - `(|(..)(..))` - OR of the sub-filters
//! - Groups nest to any depth, including nested `!`
//!
//! Values are captured verbatim up to the closing bracket, so they may
//! contain spaces and characters that are structural elsewhere.
//!
//! # Example
//!
//! ```
//! use ldap_xpath_rs::filter::parse_filter;
//!
//! // Full LDAP URLs and bare filters both work
//! let expression = parse_filter("ldap://localhost/dc=example??sub?(mail=*)").unwrap();
//! assert_eq!(expression.to_string(), "/*[mail]");
//!
//! let expression = parse_filter("(!(cn=John))").unwrap();
//! assert_eq!(expression.to_string(), "/*[not(cn = 'John')]");
//! ```

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::parse_filter;
