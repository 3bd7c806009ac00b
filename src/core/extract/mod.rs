//! Translation call-site extraction.
//!
//! Walks a parsed module and yields the literal key of every `t("...")` call,
//! in document order. Calls through a member (`i18n.t("a")`), calls with a
//! non-literal first argument (`t(key)`, `` t(`a.${b}`) ``) and calls without
//! arguments contribute nothing.

use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, Module};
use swc_ecma_visit::{Visit, VisitWith};

/// Name of the translation function whose first argument is a catalog key.
pub const TRANSLATION_FN: &str = "t";

/// Shape of a call's callee, as far as recognition is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalleeKind<'a> {
    /// Plain identifier: `t(...)`
    Identifier(&'a str),
    /// Member access, static or computed: `i18n.t(...)`, `obj["t"](...)`
    Member,
    /// `super(...)`, `import(...)`, or any other expression.
    Other,
}

/// Shape of a call's first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind<'a> {
    StringLiteral(&'a str),
    /// Variables, templates, concatenations, spreads, ...
    Other,
    /// The call has no arguments.
    Missing,
}

/// Parentheses are transparent: `(t)("a")` is a call of `t`.
fn unwrap_parens(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let Expr::Paren(paren) = current {
        current = &paren.expr;
    }
    current
}

impl<'a> CalleeKind<'a> {
    pub fn of(callee: &'a Callee) -> Self {
        match callee {
            Callee::Expr(expr) => match unwrap_parens(expr) {
                Expr::Ident(ident) => CalleeKind::Identifier(ident.sym.as_str()),
                Expr::Member(_) | Expr::SuperProp(_) => CalleeKind::Member,
                _ => CalleeKind::Other,
            },
            Callee::Super(_) | Callee::Import(_) => CalleeKind::Other,
        }
    }
}

impl<'a> ArgumentKind<'a> {
    pub fn of_first(args: &'a [ExprOrSpread]) -> Self {
        let Some(first) = args.first() else {
            return ArgumentKind::Missing;
        };
        if first.spread.is_some() {
            return ArgumentKind::Other;
        }
        match unwrap_parens(&first.expr) {
            Expr::Lit(Lit::Str(s)) => s
                .value
                .as_str()
                .map_or(ArgumentKind::Other, ArgumentKind::StringLiteral),
            _ => ArgumentKind::Other,
        }
    }
}

/// The recognition rule: a call yields a key only when its callee is the
/// plain identifier [`TRANSLATION_FN`] and its first argument is a string
/// literal.
pub fn translation_key<'a>(callee: CalleeKind<'a>, first_arg: ArgumentKind<'a>) -> Option<&'a str> {
    match (callee, first_arg) {
        (CalleeKind::Identifier(name), ArgumentKind::StringLiteral(key)) if name == TRANSLATION_FN => {
            Some(key)
        }
        _ => None,
    }
}

/// AST visitor collecting translation keys in discovery order.
#[derive(Debug, Default)]
pub struct CallSiteExtractor {
    keys: Vec<String>,
}

impl CallSiteExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extract(mut self, module: &Module) -> Vec<String> {
        module.visit_with(&mut self);
        self.keys
    }
}

impl Visit for CallSiteExtractor {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        let callee = CalleeKind::of(&node.callee);
        let first_arg = ArgumentKind::of_first(&node.args);
        if let Some(key) = translation_key(callee, first_arg) {
            self.keys.push(key.to_string());
        }

        // Keys may also appear in nested calls: t(t("a.b"))
        node.visit_children_with(self);
    }
}

/// Keys referenced by translation calls in `module`, in document order.
pub fn extract_keys(module: &Module) -> impl Iterator<Item = String> {
    CallSiteExtractor::new().extract(module).into_iter()
}
