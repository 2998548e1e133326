//! Query trees and expressions in the service's XPath dialect.
//!
//! [`XPathQuery`] models a predicate over object attributes, either a
//! single comparison or a boolean group of sub-queries.
//! [`XPathExpression`] binds a query to an object type scope and renders
//! the complete filter text; [`XPathDereferencedExpression`] additionally
//! resolves a named attribute of the matches instead of the matches
//! themselves.

mod expression;
mod query;

pub use expression::{
    XPathDereferencedExpression, XPathExpression, ANY_OBJECT_TYPE, FILTER_DIALECT,
    FILTER_NAMESPACE,
};
pub use query::{ComparisonOperator, GroupOperator, XPathQuery};
