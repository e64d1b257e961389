//! The `no-en` rule: flag string and template literals that look like English prose.
//!
//! The rule is an `swc_ecma_visit::Visit` implementation. The host owns the
//! traversal; the rule only overrides the five node kinds it cares about and
//! always recurses into children, so nested positions are inspected
//! independently.
//!
//! ## Module Structure
//!
//! - `english`: the text heuristic (`looks_english`)
//! - `exemption`: built-in and user-configured call exemptions

pub mod english;
pub mod exemption;

pub use english::looks_english;
pub use exemption::{ExemptionRule, ExemptionSet, is_exempt};

use swc_common::Span;
use swc_ecma_ast::{
    AssignExpr, BinExpr, BinaryOp, CallExpr, Expr, ExprOrSpread, Lit, OptCall, Program,
    ReturnStmt, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Rule identifier used in reports.
pub const RULE_NAME: &str = "no-en";

/// Diagnostic message attached to every violation.
pub const MESSAGE: &str = "English text in string literals is not allowed";

/// Syntactic position a flagged value was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// Right-hand side of `a = ..` (any assignment operator).
    Assignment,
    /// Right-hand side of `a || ..`, `a && ..` or `a ?? ..`.
    Logical,
    /// Argument of a non-exempt call.
    CallArgument,
    /// Argument of `return ..`.
    Return,
    /// Initializer of `var/let/const x = ..`.
    VariableInit,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Assignment => write!(f, "assignment"),
            Position::Logical => write!(f, "logical fallback"),
            Position::CallArgument => write!(f, "call argument"),
            Position::Return => write!(f, "return value"),
            Position::VariableInit => write!(f, "variable initializer"),
        }
    }
}

/// Kind of value that was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlaggedValue {
    /// A plain string literal.
    Literal,
    /// A template literal; the span covers the whole template.
    Template,
}

/// A single report produced by the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Span of the offending value node.
    pub span: Span,
    pub value: FlaggedValue,
    pub position: Position,
    /// The text that matched: the literal's value, or the first matching template chunk.
    pub text: String,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        MESSAGE
    }
}

/// Strip parentheses around an expression: `(expr)`, `((expr))`.
pub fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        _ => expr,
    }
}

/// Classify a candidate value.
///
/// String literals are tested on their value; template literals on the raw
/// text of each static chunk. Interpolated expressions are never inspected.
pub fn classify(expr: &Expr) -> Option<(Span, FlaggedValue, String)> {
    match unwrap_paren(expr) {
        Expr::Lit(Lit::Str(s)) => {
            // Lone surrogates become U+FFFD; only the leading word decides.
            let value = s.value.to_string_lossy();
            looks_english(&value).then(|| (s.span, FlaggedValue::Literal, value.into_owned()))
        }
        Expr::Tpl(tpl) => tpl
            .quasis
            .iter()
            .map(|quasi| &*quasi.raw)
            .find(|raw| looks_english(raw))
            .map(|raw| (tpl.span, FlaggedValue::Template, raw.to_owned())),
        _ => None,
    }
}

pub struct NoEnglishRule<'a> {
    exemptions: &'a ExemptionSet,
    pub violations: Vec<Violation>,
}

impl<'a> NoEnglishRule<'a> {
    pub fn new(exemptions: &'a ExemptionSet) -> Self {
        Self {
            exemptions,
            violations: Vec::new(),
        }
    }

    /// Run the rule over a whole program and return violations in traversal order.
    pub fn check(mut self, program: &Program) -> Vec<Violation> {
        self.visit_program(program);
        self.violations
    }

    fn inspect(&mut self, expr: &Expr, position: Position) {
        if let Some((span, value, text)) = classify(expr) {
            self.violations.push(Violation {
                span,
                value,
                position,
                text,
            });
        }
    }

    fn inspect_args(&mut self, args: &[ExprOrSpread]) {
        // Spread arguments are not values of their own.
        for arg in args.iter().filter(|arg| arg.spread.is_none()) {
            self.inspect(&arg.expr, Position::CallArgument);
        }
    }
}

impl Visit for NoEnglishRule<'_> {
    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        self.inspect(&node.right, Position::Assignment);
        node.visit_children_with(self);
    }

    fn visit_bin_expr(&mut self, node: &BinExpr) {
        if matches!(
            node.op,
            BinaryOp::LogicalOr | BinaryOp::LogicalAnd | BinaryOp::NullishCoalescing
        ) {
            self.inspect(&node.right, Position::Logical);
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if !self.exemptions.is_exempt(node) {
            self.inspect_args(&node.args);
        }
        node.visit_children_with(self);
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        if !self.exemptions.is_exempt_opt_call(node) {
            self.inspect_args(&node.args);
        }
        node.visit_children_with(self);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if let Some(arg) = &node.arg {
            self.inspect(arg, Position::Return);
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(init) = &node.init {
            self.inspect(init, Position::VariableInit);
        }
        node.visit_children_with(self);
    }
}

/// Convenience wrapper: run [`NoEnglishRule`] over `program`.
pub fn check_program(program: &Program, exemptions: &ExemptionSet) -> Vec<Violation> {
    NoEnglishRule::new(exemptions).check(program)
}
