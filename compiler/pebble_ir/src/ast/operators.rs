//! Binary operators.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Relational
    Lt,
    Gt,

    // Equality
    StrictEq,

    // Logical
    And,
    Or,
}

/// Operand requirements shared by a group of operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpCategory {
    /// `+ - * /`: two numbers in, a number out.
    Arithmetic,
    /// `< >`: two numbers in, a boolean out.
    Relational,
    /// `===`: any two values in, a boolean out.
    Equality,
    /// `&& ||`: two booleans in, a boolean out. Never short-circuits.
    Logical,
}

impl BinaryOp {
    /// Every operator, in source precedence order (tightest first).
    pub const ALL: [BinaryOp; 9] = [
        Self::Mul,
        Self::Div,
        Self::Add,
        Self::Sub,
        Self::Lt,
        Self::Gt,
        Self::StrictEq,
        Self::And,
        Self::Or,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::StrictEq => "===",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Parse a source-level symbol. Returns `None` for anything unrecognized.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }

    pub const fn category(self) -> OpCategory {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => OpCategory::Arithmetic,
            Self::Lt | Self::Gt => OpCategory::Relational,
            Self::StrictEq => OpCategory::Equality,
            Self::And | Self::Or => OpCategory::Logical,
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = binds less tightly. Used by `Display` for `Expr` to
    /// decide where parentheses are needed.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
            Self::Lt | Self::Gt => 7,
            Self::StrictEq => 8,
            Self::And => 12,
            Self::Or => 13,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
