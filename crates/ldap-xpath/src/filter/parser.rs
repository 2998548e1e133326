//! Recursive descent parser turning LDAP filter text into XPath queries.

use std::borrow::Cow;

use crate::xpath::{
    ComparisonOperator, GroupOperator, XPathExpression, XPathQuery, ANY_OBJECT_TYPE,
};

use super::error::{ParseError, ParseResult};
use super::lexer::{TokenKind, Tokenizer};

/// Parses an LDAP filter into an XPath expression scoped to every object
/// type.
///
/// The input is either a full LDAP URL such as
/// `ldap://host/dc=example??sub?(cn=John)`, whose base DN and scope are
/// discarded and whose filter part is percent-decoded, or bare filter
/// text starting with `(`, which is parsed as-is. Text after the closing
/// bracket of a complete filter is ignored.
///
/// # Example
/// ```
/// use ldap_xpath_rs::filter::parse_filter;
///
/// let expression = parse_filter("(&(cn=John)(sn=Smith))").unwrap();
/// assert_eq!(expression.to_string(), "/*[(cn = 'John' and sn = 'Smith')]");
/// ```
pub fn parse_filter(input: &str) -> ParseResult<XPathExpression> {
    let filter_text = extract_filter(input)?;
    let mut tokenizer = Tokenizer::new(&filter_text);

    let opening = tokenizer.next_non_whitespace();
    if opening.kind != TokenKind::OpenBracket {
        return Err(ParseError::unexpected(
            "expected '(' at the start of a filter",
            &opening,
            tokenizer.source(),
        ));
    }

    let token = tokenizer.next_non_whitespace();
    let query = match token.kind {
        TokenKind::Word => Some(read_comparison(&mut tokenizer, false)?),
        TokenKind::Ampersand | TokenKind::Pipe => Some(read_group(&mut tokenizer)?),
        TokenKind::Exclamation => Some(read_negated_comparison(&mut tokenizer)?),
        // anything else means an empty filter such as "()"
        _ => None,
    };

    Ok(match query {
        Some(query) => XPathExpression::new(ANY_OBJECT_TYPE, query),
        None => XPathExpression::empty(ANY_OBJECT_TYPE),
    })
}

/// Pulls the filter text out of an LDAP URL. Bare filter text, recognized
/// by its leading `(`, passes through untouched; everything else has the
/// part through the scope marker (`??sub?`, `??one?`, ...) discarded and
/// the remainder percent-decoded.
fn extract_filter(input: &str) -> ParseResult<Cow<'_, str>> {
    if input.trim_start().starts_with('(') {
        return Ok(Cow::Borrowed(input));
    }

    let rest = strip_scope_marker(input);
    urlencoding::decode(rest).map_err(|_| {
        ParseError::invalid_input("filter is not valid percent-encoded UTF-8", rest)
    })
}

/// Discards everything through the LDAP URL scope marker (`??<scope>?`).
/// Input without a marker is returned unchanged.
fn strip_scope_marker(input: &str) -> &str {
    if let Some(start) = input.find("??") {
        let after_scope = &input[start + 2..];
        if let Some(end) = after_scope.find('?') {
            return &after_scope[end + 1..];
        }
    }
    input
}

/// Reads a comparison whose attribute-name word is the tokenizer's
/// current token, through its closing bracket.
///
/// `negate` turns `=` into a not-equals test and `=*` into an absence
/// test. The relational operators have no negated form and parse
/// unchanged.
fn read_comparison(tokenizer: &mut Tokenizer<'_>, negate: bool) -> ParseResult<XPathQuery> {
    let attribute_name = match tokenizer.current_token() {
        Some(token) if token.kind == TokenKind::Word => token.value.clone(),
        Some(token) => {
            return Err(ParseError::unexpected(
                "expected an attribute name",
                token,
                tokenizer.source(),
            ))
        }
        None => {
            return Err(ParseError::invalid_input(
                "expected an attribute name",
                tokenizer.source(),
            ))
        }
    };

    let operator_token = tokenizer.next_non_whitespace();
    let operator = match comparison_operator(operator_token.kind, negate) {
        Some(operator) => operator,
        None => {
            return Err(ParseError::unexpected(
                "expected a comparison operator",
                &operator_token,
                tokenizer.source(),
            ))
        }
    };

    let value = if operator.requires_value() {
        Some(tokenizer.consume_until(TokenKind::CloseBracket))
    } else {
        None
    };

    let closing = tokenizer.next_non_whitespace();
    if closing.kind != TokenKind::CloseBracket {
        return Err(ParseError::unexpected(
            "expected ')' after the comparison",
            &closing,
            tokenizer.source(),
        ));
    }

    Ok(XPathQuery::Comparison {
        attribute_name,
        operator,
        value,
    })
}

/// Maps an operator token to a comparison operator, honoring negation.
fn comparison_operator(kind: TokenKind, negate: bool) -> Option<ComparisonOperator> {
    match kind {
        TokenKind::Equals if negate => Some(ComparisonOperator::NotEquals),
        TokenKind::Equals => Some(ComparisonOperator::Equals),
        TokenKind::IsPresent if negate => Some(ComparisonOperator::IsNotPresent),
        TokenKind::IsPresent => Some(ComparisonOperator::IsPresent),
        TokenKind::GreaterThan => Some(ComparisonOperator::GreaterThan),
        TokenKind::GreaterThanOrEquals => Some(ComparisonOperator::GreaterThanOrEquals),
        TokenKind::LessThan => Some(ComparisonOperator::LessThan),
        TokenKind::LessThanOrEquals => Some(ComparisonOperator::LessThanOrEquals),
        _ => None,
    }
}

/// Reads a top-level negated comparison: the `!` itself was just
/// consumed, and `(`, a single comparison and two closing brackets must
/// follow. The negation is folded into the comparison operator.
fn read_negated_comparison(tokenizer: &mut Tokenizer<'_>) -> ParseResult<XPathQuery> {
    let opening = tokenizer.next_non_whitespace();
    if opening.kind != TokenKind::OpenBracket {
        return Err(ParseError::unexpected(
            "expected '(' after '!'",
            &opening,
            tokenizer.source(),
        ));
    }

    let attribute = tokenizer.next_non_whitespace();
    if attribute.kind != TokenKind::Word {
        return Err(ParseError::unexpected(
            "expected an attribute name after '!('",
            &attribute,
            tokenizer.source(),
        ));
    }

    let comparison = read_comparison(tokenizer, true)?;

    let closing = tokenizer.next_non_whitespace();
    if closing.kind != TokenKind::CloseBracket {
        return Err(ParseError::unexpected(
            "expected ')' to close the negation",
            &closing,
            tokenizer.source(),
        ));
    }

    Ok(comparison)
}

/// Reads a boolean group whose leading operator token (`&`, `|` or `!`)
/// is the tokenizer's current token, through its closing bracket.
///
/// A nested `!` becomes a negated AND group around the sub-filters that
/// follow it; unlike the top-level form, the operators inside are left
/// alone and the negation applies to the group as a whole.
fn read_group(tokenizer: &mut Tokenizer<'_>) -> ParseResult<XPathQuery> {
    let (operator, negate) = match tokenizer.current_token().map(|token| token.kind) {
        Some(TokenKind::Ampersand) => (GroupOperator::And, false),
        Some(TokenKind::Pipe) => (GroupOperator::Or, false),
        Some(TokenKind::Exclamation) => (GroupOperator::And, true),
        _ => {
            return Err(ParseError::invalid_input(
                "expected a group operator",
                tokenizer.source(),
            ))
        }
    };

    let mut queries = Vec::new();

    loop {
        let token = tokenizer.next_non_whitespace();
        match token.kind {
            TokenKind::CloseBracket => {
                if queries.is_empty() {
                    return Err(ParseError::at_token(
                        "a group needs at least one sub-filter",
                        &token,
                        tokenizer.source(),
                    ));
                }
                break;
            }
            TokenKind::OpenBracket => {
                let inner = tokenizer.next_non_whitespace();
                let child = match inner.kind {
                    TokenKind::Word => read_comparison(tokenizer, false)?,
                    TokenKind::Ampersand | TokenKind::Pipe | TokenKind::Exclamation => {
                        read_group(tokenizer)?
                    }
                    _ => {
                        return Err(ParseError::unexpected(
                            "expected an attribute name or group operator",
                            &inner,
                            tokenizer.source(),
                        ))
                    }
                };
                queries.push(child);
            }
            _ => {
                return Err(ParseError::unexpected(
                    "expected '(' to open a sub-filter or ')' to close the group",
                    &token,
                    tokenizer.source(),
                ))
            }
        }
    }

    Ok(XPathQuery::Group {
        operator,
        negate,
        queries,
    })
}
