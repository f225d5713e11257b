//! The tree shape emitted by an external parser, and its lowering.
//!
//! A parser hands over plain tagged records:
//!
//! ```text
//! {"kind":"operator","operator":"+","left":{"kind":"variable","name":"x"},
//!  "right":{"kind":"number","value":2}}
//! {"kind":"if","test":{...},"truePart":[...],"falsePart":[...]}
//! ```
//!
//! Nothing about those records is checked by the type system: the `kind`
//! can be any string and every payload field is optional. [`lower_program`]
//! walks them once and produces the closed [`Expr`] / [`Stmt`] tree. A
//! record that breaks the contract lowers to an `Invalid` node holding its
//! [`NodeError`], which the evaluator raises when execution reaches it, in
//! the same order it would raise any other error. [`validate_program`]
//! rejects such a tree up front instead.

use pebble_stack::ensure_sufficient_stack;
use serde::{Deserialize, Serialize};

use crate::{BinaryOp, Expr, Stmt};

/// Literal payload of a `number` or `boolean` node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Number(f64),
}

/// An expression record as a parser emits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExprNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<ExprNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<ExprNode>>,
}

/// A statement record as a parser emits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StmtNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<ExprNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<ExprNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_part: Option<Vec<StmtNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_part: Option<Vec<StmtNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<StmtNode>>,
}

/// A node that does not describe a valid tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("unknown expression kind `{kind}`")]
    UnknownExpression { kind: String },
    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },
    #[error("unknown statement kind `{kind}`")]
    UnknownStatement { kind: String },
    #[error("malformed `{kind}` node: missing or invalid `{field}`")]
    MalformedNode { kind: String, field: &'static str },
    #[error("invalid program JSON: {message}")]
    InvalidJson { message: String },
}

fn malformed(kind: &str, field: &'static str) -> NodeError {
    NodeError::MalformedNode {
        kind: kind.to_string(),
        field,
    }
}

/// Lower one expression record.
///
/// Lowering never fails. A record that does not describe an expression
/// becomes [`Expr::Invalid`], and an `operator` record with a bad or missing
/// symbol becomes [`Expr::InvalidBinary`] around its lowered operands, so the
/// operands are still evaluated before the symbol is reported.
pub fn lower_expr(node: &ExprNode) -> Expr {
    ensure_sufficient_stack(|| {
        let kind = node.kind.as_str();
        match kind {
            "number" => match node.value {
                Some(Literal::Number(n)) => Expr::Number(n),
                _ => Expr::Invalid(malformed(kind, "value")),
            },
            "boolean" => match node.value {
                Some(Literal::Boolean(b)) => Expr::Boolean(b),
                _ => Expr::Invalid(malformed(kind, "value")),
            },
            "variable" => node
                .name
                .as_deref()
                .map_or_else(|| Expr::Invalid(malformed(kind, "name")), Expr::var),
            "operator" => {
                let operand = |field: Option<&ExprNode>, name: &'static str| {
                    field.map_or_else(|| Expr::Invalid(malformed(kind, name)), lower_expr)
                };
                let left = operand(node.left.as_deref(), "left");
                let right = operand(node.right.as_deref(), "right");
                let op = node
                    .operator
                    .as_deref()
                    .ok_or_else(|| malformed(kind, "operator"))
                    .and_then(|symbol| {
                        BinaryOp::from_symbol(symbol).ok_or_else(|| NodeError::UnknownOperator {
                            symbol: symbol.to_string(),
                        })
                    });
                match op {
                    Ok(op) => Expr::binary(op, left, right),
                    Err(error) => Expr::InvalidBinary {
                        error,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                }
            }
            other => Expr::Invalid(NodeError::UnknownExpression {
                kind: other.to_string(),
            }),
        }
    })
}

/// Lower one statement record.
///
/// A record that does not describe a statement becomes [`Stmt::Invalid`].
/// A missing `falsePart` on an `if` is read as an empty else branch; a
/// missing `truePart` or `body` becomes a block holding one invalid
/// statement, which fails only if the block runs.
pub fn lower_stmt(node: &StmtNode) -> Stmt {
    ensure_sufficient_stack(|| {
        let kind = node.kind.as_str();
        let expr_field = |field: Option<&ExprNode>, name: &'static str| {
            field.map_or_else(|| Expr::Invalid(malformed(kind, name)), lower_expr)
        };
        let block_field = |field: Option<&[StmtNode]>, name: &'static str| {
            field.map_or_else(|| vec![Stmt::Invalid(malformed(kind, name))], lower_program)
        };

        match kind {
            "let" => match node.name.as_deref() {
                Some(name) => Stmt::let_(name, expr_field(node.expression.as_ref(), "expression")),
                None => Stmt::Invalid(malformed(kind, "name")),
            },
            "assignment" => match node.name.as_deref() {
                Some(name) => {
                    Stmt::assign(name, expr_field(node.expression.as_ref(), "expression"))
                }
                None => Stmt::Invalid(malformed(kind, "name")),
            },
            "if" => Stmt::if_else(
                expr_field(node.test.as_ref(), "test"),
                block_field(node.true_part.as_deref(), "truePart"),
                node.false_part.as_deref().map_or_else(Vec::new, lower_program),
            ),
            "while" => Stmt::while_(
                expr_field(node.test.as_ref(), "test"),
                block_field(node.body.as_deref(), "body"),
            ),
            "print" => Stmt::print(expr_field(node.expression.as_ref(), "expression")),
            other => Stmt::Invalid(NodeError::UnknownStatement {
                kind: other.to_string(),
            }),
        }
    })
}

/// Lower a statement list.
pub fn lower_program(nodes: &[StmtNode]) -> Vec<Stmt> {
    nodes.iter().map(lower_stmt).collect()
}

/// Reject a lowered program that contains any invalid node, reporting the
/// first one in source order.
///
/// Evaluation raises the same errors lazily; this is for callers that want
/// a bad tree refused before anything runs.
pub fn validate_program(program: &[Stmt]) -> Result<(), NodeError> {
    match program.iter().find_map(Stmt::first_error) {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

/// Deserialize a JSON array of statement records without lowering it.
pub fn nodes_from_json(text: &str) -> Result<Vec<StmtNode>, NodeError> {
    serde_json::from_str(text).map_err(|e| NodeError::InvalidJson {
        message: e.to_string(),
    })
}

/// Deserialize and lower a JSON program in one step. Only malformed JSON
/// fails here.
pub fn program_from_json(text: &str) -> Result<Vec<Stmt>, NodeError> {
    Ok(lower_program(&nodes_from_json(text)?))
}

/// The parser `kind` an invalid node was lowered from.
fn invalid_kind(error: &NodeError) -> String {
    match error {
        NodeError::UnknownExpression { kind }
        | NodeError::UnknownStatement { kind }
        | NodeError::MalformedNode { kind, .. } => kind.clone(),
        NodeError::UnknownOperator { .. } => "operator".to_string(),
        NodeError::InvalidJson { .. } => String::new(),
    }
}

impl From<&Expr> for ExprNode {
    fn from(expr: &Expr) -> Self {
        let kind = expr.kind_name().to_string();
        match expr {
            Expr::Number(n) => ExprNode {
                kind,
                value: Some(Literal::Number(*n)),
                ..ExprNode::default()
            },
            Expr::Boolean(b) => ExprNode {
                kind,
                value: Some(Literal::Boolean(*b)),
                ..ExprNode::default()
            },
            Expr::Variable(name) => ExprNode {
                kind,
                name: Some(name.to_string()),
                ..ExprNode::default()
            },
            Expr::Binary { op, left, right } => ExprNode {
                kind,
                operator: Some(op.as_symbol().to_string()),
                left: Some(Box::new(ExprNode::from(&**left))),
                right: Some(Box::new(ExprNode::from(&**right))),
                ..ExprNode::default()
            },
            Expr::InvalidBinary { error, left, right } => ExprNode {
                kind,
                operator: match error {
                    NodeError::UnknownOperator { symbol } => Some(symbol.clone()),
                    _ => None,
                },
                left: Some(Box::new(ExprNode::from(&**left))),
                right: Some(Box::new(ExprNode::from(&**right))),
                ..ExprNode::default()
            },
            Expr::Invalid(error) => ExprNode {
                kind: invalid_kind(error),
                ..ExprNode::default()
            },
        }
    }
}

impl From<&Stmt> for StmtNode {
    fn from(stmt: &Stmt) -> Self {
        let kind = stmt.kind_name().to_string();
        match stmt {
            Stmt::Let { name, init: expr } | Stmt::Assign { name, value: expr } => StmtNode {
                kind,
                name: Some(name.to_string()),
                expression: Some(ExprNode::from(expr)),
                ..StmtNode::default()
            },
            Stmt::If {
                test,
                then_branch,
                else_branch,
            } => StmtNode {
                kind,
                test: Some(ExprNode::from(test)),
                true_part: Some(block_nodes(then_branch)),
                false_part: Some(block_nodes(else_branch)),
                ..StmtNode::default()
            },
            Stmt::While { test, body } => StmtNode {
                kind,
                test: Some(ExprNode::from(test)),
                body: Some(block_nodes(body)),
                ..StmtNode::default()
            },
            Stmt::Print(expr) => StmtNode {
                kind,
                expression: Some(ExprNode::from(expr)),
                ..StmtNode::default()
            },
            Stmt::Invalid(error) => StmtNode {
                kind: invalid_kind(error),
                ..StmtNode::default()
            },
        }
    }
}

fn block_nodes(stmts: &[Stmt]) -> Vec<StmtNode> {
    stmts.iter().map(StmtNode::from).collect()
}

#[cfg(test)]
mod tests;
