//! Abstract syntax tree for XPath attribute queries.

use std::fmt;

/// Comparison applied by a single attribute test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    // ==================== Value Comparisons ====================
    /// The attribute equals the value.
    Equals,

    /// The attribute differs from the value.
    NotEquals,

    /// The attribute is greater than the value.
    GreaterThan,

    /// The attribute is greater than or equal to the value.
    GreaterThanOrEquals,

    /// The attribute is less than the value.
    LessThan,

    /// The attribute is less than or equal to the value.
    LessThanOrEquals,

    // ==================== Presence Tests ====================
    /// The attribute has at least one value.
    IsPresent,

    /// The attribute has no value.
    IsNotPresent,
}

impl ComparisonOperator {
    /// Returns true if this operator compares against an explicit value.
    ///
    /// Presence tests are the only operators that stand alone.
    pub fn requires_value(&self) -> bool {
        !matches!(
            self,
            ComparisonOperator::IsPresent | ComparisonOperator::IsNotPresent
        )
    }
}

/// Boolean connective joining the children of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOperator {
    /// Every child must match.
    And,

    /// At least one child must match.
    Or,
}

impl GroupOperator {
    fn connective(&self) -> &'static str {
        match self {
            GroupOperator::And => " and ",
            GroupOperator::Or => " or ",
        }
    }
}

/// A node of an XPath attribute query tree.
///
/// Exactly two kinds of node exist: an atomic attribute comparison and a
/// boolean group of sub-queries. `Display` renders a node as a predicate
/// fragment in the service's XPath dialect, without the surrounding
/// object type step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XPathQuery {
    /// An atomic attribute test.
    Comparison {
        /// The schema attribute being tested.
        attribute_name: String,
        /// How the attribute is compared.
        operator: ComparisonOperator,
        /// The comparison value; absent exactly for presence tests.
        value: Option<String>,
    },

    /// A boolean combination of sub-queries.
    Group {
        /// The connective joining the children.
        operator: GroupOperator,
        /// Whether the whole group is negated.
        negate: bool,
        /// The children, in source order.
        queries: Vec<XPathQuery>,
    },
}

impl XPathQuery {
    /// Creates a comparison node for a value-bearing operator.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::{ComparisonOperator, XPathQuery};
    ///
    /// let query = XPathQuery::compare("cn", ComparisonOperator::Equals, "John");
    /// assert_eq!(query.to_string(), "cn = 'John'");
    /// ```
    pub fn compare(
        attribute_name: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        XPathQuery::Comparison {
            attribute_name: attribute_name.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Creates a presence test for an attribute.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::XPathQuery;
    ///
    /// let query = XPathQuery::present("mail");
    /// assert_eq!(query.to_string(), "mail");
    /// ```
    pub fn present(attribute_name: impl Into<String>) -> Self {
        XPathQuery::Comparison {
            attribute_name: attribute_name.into(),
            operator: ComparisonOperator::IsPresent,
            value: None,
        }
    }

    /// Creates an absence test for an attribute.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::XPathQuery;
    ///
    /// let query = XPathQuery::absent("mail");
    /// assert_eq!(query.to_string(), "not(mail)");
    /// ```
    pub fn absent(attribute_name: impl Into<String>) -> Self {
        XPathQuery::Comparison {
            attribute_name: attribute_name.into(),
            operator: ComparisonOperator::IsNotPresent,
            value: None,
        }
    }

    /// Creates an AND group from sub-queries.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::{ComparisonOperator, XPathQuery};
    ///
    /// let query = XPathQuery::and(vec![
    ///     XPathQuery::compare("cn", ComparisonOperator::Equals, "John"),
    ///     XPathQuery::present("mail"),
    /// ]);
    /// assert_eq!(query.to_string(), "(cn = 'John' and mail)");
    /// ```
    pub fn and(queries: Vec<XPathQuery>) -> Self {
        XPathQuery::Group {
            operator: GroupOperator::And,
            negate: false,
            queries,
        }
    }

    /// Creates an OR group from sub-queries.
    pub fn or(queries: Vec<XPathQuery>) -> Self {
        XPathQuery::Group {
            operator: GroupOperator::Or,
            negate: false,
            queries,
        }
    }

    /// Wraps a query in a negated group.
    ///
    /// # Example
    ///
    /// ```
    /// use ldap_xpath_rs::xpath::{ComparisonOperator, XPathQuery};
    ///
    /// let query = XPathQuery::negate(XPathQuery::compare(
    ///     "cn",
    ///     ComparisonOperator::Equals,
    ///     "John",
    /// ));
    /// assert_eq!(query.to_string(), "not((cn = 'John'))");
    /// ```
    pub fn negate(query: XPathQuery) -> Self {
        XPathQuery::Group {
            operator: GroupOperator::And,
            negate: true,
            queries: vec![query],
        }
    }
}

/// Encodes characters significant to the rendered filter text.
///
/// Values end up inside single-quoted XPath string literals that travel
/// in an XML request body, so embedded quotes use the XML entity form.
fn escape_value(value: &str) -> String {
    value.replace('\'', "&apos;")
}

impl fmt::Display for XPathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XPathQuery::Comparison {
                attribute_name,
                operator,
                value,
            } => {
                let value = escape_value(value.as_deref().unwrap_or_default());
                match operator {
                    ComparisonOperator::Equals => {
                        write!(f, "{attribute_name} = '{value}'")
                    }
                    ComparisonOperator::NotEquals => {
                        write!(f, "not({attribute_name} = '{value}')")
                    }
                    ComparisonOperator::GreaterThan => {
                        write!(f, "{attribute_name} > '{value}'")
                    }
                    ComparisonOperator::GreaterThanOrEquals => {
                        write!(f, "{attribute_name} >= '{value}'")
                    }
                    ComparisonOperator::LessThan => {
                        write!(f, "{attribute_name} < '{value}'")
                    }
                    ComparisonOperator::LessThanOrEquals => {
                        write!(f, "{attribute_name} <= '{value}'")
                    }
                    ComparisonOperator::IsPresent => f.write_str(attribute_name),
                    ComparisonOperator::IsNotPresent => {
                        write!(f, "not({attribute_name})")
                    }
                }
            }
            XPathQuery::Group {
                operator,
                negate,
                queries,
            } => {
                let joined = queries
                    .iter()
                    .map(|query| query.to_string())
                    .collect::<Vec<_>>()
                    .join(operator.connective());
                if *negate {
                    write!(f, "not(({joined}))")
                } else {
                    write!(f, "({joined})")
                }
            }
        }
    }
}
