//! Query parsing and evaluation.
//!
//! Parsing never fails. Anything the grammar does not recognise becomes an
//! [`Expr::Malformed`] term, which matches nothing, so a broken query can only
//! ever narrow a result and never widen it.

use crate::tags::validation::is_tag_char;
use crate::tags::TagSet;
use std::fmt;

const OR_SEPARATOR: &str = " OR ";
const AND_SEPARATOR: &str = " AND ";
const NOT_PREFIX: &str = "NOT ";
const TAG_PREFIX: &str = "tag:";

/// A parsed query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// True if any branch is true. An empty `Or` is false.
    Or(Vec<Expr>),
    /// True if every branch is true.
    And(Vec<Expr>),
    /// True if the object lacks the tag.
    Not(String),
    /// True if the object has the tag.
    Tag(String),
    /// A term that could not be understood; always false. Keeps the raw text.
    Malformed(String),
}

impl Expr {
    pub fn matches(&self, tags: &TagSet) -> bool {
        match self {
            Expr::Or(branches) => branches.iter().any(|b| b.matches(tags)),
            Expr::And(branches) => branches.iter().all(|b| b.matches(tags)),
            Expr::Not(tag) => !tags.contains(tag),
            Expr::Tag(tag) => tags.contains(tag),
            Expr::Malformed(_) => false,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Or(branches) => write_joined(f, branches, " OR "),
            Expr::And(branches) => write_joined(f, branches, " AND "),
            Expr::Not(tag) => write!(f, "NOT tag:{}", tag),
            Expr::Tag(tag) => write!(f, "tag:{}", tag),
            Expr::Malformed(raw) => write!(f, "<malformed: {}>", raw),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, branches: &[Expr], sep: &str) -> fmt::Result {
    for (i, branch) in branches.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        let nested =
            branches.len() > 1 && matches!(branch, Expr::Or(b) | Expr::And(b) if b.len() > 1);
        if nested {
            write!(f, "({})", branch)?;
        } else {
            write!(f, "{}", branch)?;
        }
    }
    Ok(())
}

/// A query ready to be matched against many objects.
///
/// Parse once, then call [`Query::matches`] per object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    root: Expr,
}

impl Query {
    /// Parses query text. OR binds loosest, then AND, then NOT (which applies
    /// to the single term after it).
    ///
    /// Empty or whitespace-only text yields a query that matches nothing.
    pub fn parse(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self {
                root: Expr::Or(Vec::new()),
            };
        }

        let clauses = input
            .split(OR_SEPARATOR)
            .map(|clause| {
                let terms = clause.trim().split(AND_SEPARATOR).map(parse_term).collect();
                Expr::And(terms)
            })
            .collect();

        Self {
            root: Expr::Or(clauses),
        }
    }

    pub fn matches(&self, tags: &TagSet) -> bool {
        self.root.matches(tags)
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.root, Expr::Or(clauses) if clauses.is_empty())
    }

    /// Tags the query refers to, positively or negatively, in order of
    /// appearance and without duplicates.
    pub fn referenced_tags(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        collect_tags(&self.root, &mut out);
        out
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

fn collect_tags<'a>(expr: &'a Expr, out: &mut Vec<&'a str>) {
    match expr {
        Expr::Or(branches) | Expr::And(branches) => {
            for b in branches {
                collect_tags(b, out);
            }
        }
        Expr::Not(tag) | Expr::Tag(tag) => {
            if !out.contains(&tag.as_str()) {
                out.push(tag);
            }
        }
        Expr::Malformed(_) => {}
    }
}

/// Parses one AND-term: `tag:<name>` or `NOT tag:<name>`.
///
/// Only the start of the term is examined. `tag:hello@world` reads as the tag
/// `hello`; whatever follows the leading name is ignored.
fn parse_term(raw: &str) -> Expr {
    let term = raw.trim();

    if let Some(rest) = term.strip_prefix(NOT_PREFIX) {
        return rest
            .trim_start()
            .strip_prefix(TAG_PREFIX)
            .and_then(leading_tag_name)
            .map(|name| Expr::Not(name.to_string()))
            .unwrap_or_else(|| Expr::Malformed(term.to_string()));
    }

    term.strip_prefix(TAG_PREFIX)
        .and_then(leading_tag_name)
        .map(|name| Expr::Tag(name.to_string()))
        .unwrap_or_else(|| Expr::Malformed(term.to_string()))
}

/// The longest prefix of `s` made of tag characters, if non-empty.
pub(crate) fn leading_tag_name(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !is_tag_char(c)).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}
