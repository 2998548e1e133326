//! LDAP filter to XPath translation.
//!
//! Legacy directory clients hand over searches as `ldap://` URLs; the
//! resource management service they actually target speaks an XPath
//! attribute filter dialect. This crate parses the LDAP filter grammar
//! and rebuilds it as an [`XPathExpression`] tree that renders the
//! service dialect, optionally wrapped in the enumeration `Filter`
//! element for XML request bodies.
//!
//! # Example
//!
//! ```
//! use ldap_xpath_rs::parse_filter;
//!
//! let expression = parse_filter("ldap://localhost/dc=example??sub?(&(cn=John)(sn=Smith))")
//!     .unwrap()
//!     .for_object_type("Person");
//! assert_eq!(expression.to_string(), "/Person[(cn = 'John' and sn = 'Smith')]");
//! ```

pub mod filter;
pub mod schema;
pub mod xpath;

pub use filter::{parse_filter, ParseError, ParseResult};
pub use schema::NameValidationError;
pub use xpath::{
    ComparisonOperator, GroupOperator, XPathDereferencedExpression, XPathExpression, XPathQuery,
};
