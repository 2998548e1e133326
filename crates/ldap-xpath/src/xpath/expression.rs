//! Expression types binding a query tree to an object type scope.

use std::fmt;

use crate::schema::{self, NameValidationError};

use super::query::XPathQuery;

/// Object type scope matching every resource type.
pub const ANY_OBJECT_TYPE: &str = "*";

/// XML namespace of the enumeration `Filter` element.
pub const FILTER_NAMESPACE: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration";

/// Dialect URI identifying the XPath filter dialect.
pub const FILTER_DIALECT: &str = "http://schemas.microsoft.com/2006/11/XPathFilterDialect";

fn wrap_in_filter(filter: &str) -> String {
    format!(
        "<Filter xmlns=\"{FILTER_NAMESPACE}\" Dialect=\"{FILTER_DIALECT}\">{filter}</Filter>"
    )
}

/// A complete filter expression scoped to an object type.
///
/// `Display` renders the expression as `/{object_type}[{query}]`, or as
/// the bare `/{object_type}` step when the expression carries no query.
/// With [`wrap_in_filter_element`](XPathExpression::wrap_in_filter_element)
/// enabled, the rendered text is embedded in the enumeration `Filter`
/// element ready for an XML request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathExpression {
    object_type: String,
    query: Option<XPathQuery>,
    wrap_filter: bool,
}

impl XPathExpression {
    /// Creates an expression matching objects of `object_type` that
    /// satisfy `query`.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::{ComparisonOperator, XPathExpression, XPathQuery};
    ///
    /// let query = XPathQuery::compare("cn", ComparisonOperator::Equals, "John");
    /// let expression = XPathExpression::new("Person", query);
    /// assert_eq!(expression.to_string(), "/Person[cn = 'John']");
    /// ```
    pub fn new(object_type: impl Into<String>, query: XPathQuery) -> Self {
        Self {
            object_type: object_type.into(),
            query: Some(query),
            wrap_filter: false,
        }
    }

    /// Creates an expression matching every object of `object_type`.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::XPathExpression;
    ///
    /// let expression = XPathExpression::empty("Person");
    /// assert_eq!(expression.to_string(), "/Person");
    /// ```
    pub fn empty(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            query: None,
            wrap_filter: false,
        }
    }

    /// Rebinds the expression to a different object type scope.
    pub fn for_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    /// Controls whether `Display` wraps the rendered filter text in the
    /// enumeration `Filter` element.
    pub fn wrap_in_filter_element(mut self, wrap: bool) -> Self {
        self.wrap_filter = wrap;
        self
    }

    /// The object type scope of this expression.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The query tree, if the expression carries one.
    pub fn query(&self) -> Option<&XPathQuery> {
        self.query.as_ref()
    }

    /// Returns true if `Display` wraps the filter text in the
    /// enumeration `Filter` element.
    pub fn is_wrapped(&self) -> bool {
        self.wrap_filter
    }

    fn filter_text(&self) -> String {
        match &self.query {
            Some(query) => format!("/{}[{}]", self.object_type, query),
            None => format!("/{}", self.object_type),
        }
    }
}

impl fmt::Display for XPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = self.filter_text();
        if self.wrap_filter {
            f.write_str(&wrap_in_filter(&filter))
        } else {
            f.write_str(&filter)
        }
    }
}

/// An expression that dereferences a named attribute of its matches.
///
/// Instead of the matched objects themselves, the service resolves the
/// objects referenced by the named attribute. Renders as the inner
/// expression followed by `/{attribute}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathDereferencedExpression {
    expression: XPathExpression,
    dereference_attribute: String,
}

impl XPathDereferencedExpression {
    /// Builds a dereferencing expression around `expression`.
    ///
    /// The attribute name is checked against the schema identifier
    /// grammar before the expression is built.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::{ComparisonOperator, XPathDereferencedExpression,
    ///     XPathExpression, XPathQuery};
    ///
    /// let query = XPathQuery::compare("DisplayName", ComparisonOperator::Equals, "Admins");
    /// let expression = XPathExpression::new("Group", query);
    /// let dereferenced = XPathDereferencedExpression::new(expression, "ExplicitMember")?;
    /// assert_eq!(
    ///     dereferenced.to_string(),
    ///     "/Group[DisplayName = 'Admins']/ExplicitMember"
    /// );
    /// # Ok::<(), ldap_xpath_rs::schema::NameValidationError>(())
    /// ```
    pub fn new(
        expression: XPathExpression,
        dereference_attribute: impl Into<String>,
    ) -> Result<Self, NameValidationError> {
        let dereference_attribute = dereference_attribute.into();
        schema::validate_object_type_name(&dereference_attribute)?;
        Ok(Self {
            expression,
            dereference_attribute,
        })
    }

    /// The wrapped expression.
    pub fn expression(&self) -> &XPathExpression {
        &self.expression
    }

    /// The attribute the matched objects are dereferenced through.
    pub fn dereference_attribute(&self) -> &str {
        &self.dereference_attribute
    }
}

impl fmt::Display for XPathDereferencedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = format!(
            "{}/{}",
            self.expression.filter_text(),
            self.dereference_attribute
        );
        if self.expression.is_wrapped() {
            f.write_str(&wrap_in_filter(&filter))
        } else {
            f.write_str(&filter)
        }
    }
}
