//! Call exemptions.
//!
//! A call is exempt when its callee is a diagnostic, assertion or test helper
//! (built in) or matches one of the user-supplied `excludes` patterns. The
//! arguments of an exempt call are never inspected.

use swc_ecma_ast::{CallExpr, Callee, Expr, MemberExpr, MemberProp, OptCall, OptChainBase};

use super::unwrap_paren;

/// Direct calls that are always exempt: `invariant(..)`, `suite(..)`, `test(..)`, `assert(..)`.
const BUILTIN_DIRECT_CALLS: &[&str] = &["invariant", "suite", "test", "assert"];

/// Base objects whose methods are always exempt: `console.*(..)`, `assert.*(..)`.
const BUILTIN_OBJECTS: &[&str] = &["console", "assert"];

/// A single user-supplied exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExemptionRule {
    /// A bare name such as `Sentry` or `captureMessage`.
    ///
    /// Matches a direct call with that name, a member call on an object with
    /// that name, or a member call whose final property has that name.
    Token(String),
    /// A dotted path such as `Sentry.captureMessage`.
    ///
    /// `base` is the first segment, `properties` are the rest in source order.
    /// Only the exact chain `base.p1.p2...pn(..)` matches.
    Path {
        base: String,
        properties: Vec<String>,
    },
}

impl ExemptionRule {
    pub fn parse(pattern: &str) -> Self {
        if !pattern.contains('.') {
            return ExemptionRule::Token(pattern.to_owned());
        }
        let mut segments = pattern.split('.').map(str::to_owned);
        let base = segments.next().unwrap_or_default();
        ExemptionRule::Path {
            base,
            properties: segments.collect(),
        }
    }

    fn matches(&self, callee: &Expr) -> bool {
        match self {
            ExemptionRule::Token(name) => {
                let name = Some(name.as_str());
                if ident_name(callee) == name {
                    return true;
                }
                as_member(callee).is_some_and(|member| {
                    ident_name(&member.obj) == name || property_name(member) == name
                })
            }
            ExemptionRule::Path { base, properties } => {
                // Walk from the outermost property access inward.
                let mut current = callee;
                for expected in properties.iter().rev() {
                    let Some(member) = as_member(current) else {
                        return false;
                    };
                    if property_name(member) != Some(expected.as_str()) {
                        return false;
                    }
                    current = &member.obj;
                }
                ident_name(current) == Some(base.as_str())
            }
        }
    }
}

/// Built-in exemptions plus the user's `excludes`.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionSet {
    rules: Vec<ExemptionRule>,
}

impl ExemptionSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: patterns
                .into_iter()
                .map(|p| ExemptionRule::parse(p.as_ref()))
                .collect(),
        }
    }

    /// User-supplied rules, in configuration order.
    pub fn rules(&self) -> &[ExemptionRule] {
        &self.rules
    }

    /// Whether the arguments of `call` should be left alone.
    pub fn is_exempt(&self, call: &CallExpr) -> bool {
        match &call.callee {
            Callee::Expr(callee) => self.is_exempt_callee(callee),
            // `super(..)` and `import(..)` have no name to match against.
            Callee::Super(_) | Callee::Import(_) => false,
        }
    }

    /// Same as [`ExemptionSet::is_exempt`] for optional calls (`fn?.(..)`, `a?.b(..)`).
    pub fn is_exempt_opt_call(&self, call: &OptCall) -> bool {
        self.is_exempt_callee(&call.callee)
    }

    fn is_exempt_callee(&self, callee: &Expr) -> bool {
        if let Some(name) = ident_name(callee)
            && BUILTIN_DIRECT_CALLS.contains(&name)
        {
            return true;
        }
        if let Some(member) = as_member(callee)
            && let Some(object) = ident_name(&member.obj)
            && BUILTIN_OBJECTS.contains(&object)
        {
            return true;
        }
        self.rules.iter().any(|rule| rule.matches(callee))
    }
}

/// Free-function form of [`ExemptionSet::is_exempt`].
pub fn is_exempt(call: &CallExpr, exemptions: &ExemptionSet) -> bool {
    exemptions.is_exempt(call)
}

fn ident_name(expr: &Expr) -> Option<&str> {
    match unwrap_paren(expr) {
        Expr::Ident(ident) => Some(&*ident.sym),
        _ => None,
    }
}

/// Property access, plain (`a.b`) or optional (`a?.b`).
fn as_member(expr: &Expr) -> Option<&MemberExpr> {
    match unwrap_paren(expr) {
        Expr::Member(member) => Some(member),
        Expr::OptChain(chain) => match &*chain.base {
            OptChainBase::Member(member) => Some(member),
            OptChainBase::Call(_) => None,
        },
        _ => None,
    }
}

/// Property name as written: `a.b`, `a.#b` and `a[b]` all name `b`.
/// Computed keys other than a bare identifier (`a["b"]`, `a[0]`) have none.
fn property_name(member: &MemberExpr) -> Option<&str> {
    match &member.prop {
        MemberProp::Ident(ident) => Some(&*ident.sym),
        MemberProp::PrivateName(private) => Some(&*private.name),
        MemberProp::Computed(computed) => ident_name(&computed.expr),
    }
}
