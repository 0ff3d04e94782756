//! Expression tree nodes.

use std::fmt;

/// A node of an S-expression tree.
///
/// Children are owned by their parent, so a tree is always finite and
/// acyclic. Nothing in this workspace mutates an `Expr` once it is built.
///
/// Equality is structural: same variant, and for lists the same length with
/// pairwise equal children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Ordered children; the length is the list's arity.
    List(Vec<Expr>),
    /// A text token, e.g. `while` or `x`.
    Atom(String),
    /// A signed integer literal.
    Int(i64),
}

/// Variant tag of an [`Expr`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    List,
    Atom,
    Int,
}

impl Kind {
    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::List => "list",
            Kind::Atom => "atom",
            Kind::Int => "integer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expr {
    /// Build an atom from text.
    pub fn atom(text: impl Into<String>) -> Self {
        Expr::Atom(text.into())
    }

    /// Build an integer node.
    pub const fn int(value: i64) -> Self {
        Expr::Int(value)
    }

    /// Build a list from any sequence of nodes.
    pub fn list(items: impl IntoIterator<Item = Expr>) -> Self {
        Expr::List(items.into_iter().collect())
    }

    /// The empty list `()`.
    pub const fn nil() -> Self {
        Expr::List(Vec::new())
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Expr::List(_) => Kind::List,
            Expr::Atom(_) => Kind::Atom,
            Expr::Int(_) => Kind::Int,
        }
    }

    #[inline]
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Expr::Atom(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Expr::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check whether this node is the atom `text`.
    pub fn is_atom(&self, text: &str) -> bool {
        self.as_atom() == Some(text)
    }

    /// Height of the tree: atoms and integers are 1, a list is one more than
    /// its tallest child (an empty list is 1).
    pub fn depth(&self) -> usize {
        match self {
            Expr::List(items) => 1 + items.iter().map(Expr::depth).max().unwrap_or(0),
            Expr::Atom(_) | Expr::Int(_) => 1,
        }
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Atom(text.to_owned())
    }
}

impl From<String> for Expr {
    fn from(text: String) -> Self {
        Expr::Atom(text)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Int(value)
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }
}

impl FromIterator<Expr> for Expr {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Expr::list(iter)
    }
}
