//! Arena of interned expressions.

use std::fmt;

use rustc_hash::FxHashMap;

use super::expr::{Expr, ExprId, Step, VarId};
use Expr::*;

/// Interns expressions, assigning structurally equal expressions the same identifier.
///
/// Every distinct expression is stored exactly once, so no sub-expression appears twice with
/// distinct identifiers (structural sharing). This makes equality and hashing of expressions
/// amortized O(1): both operate on identifiers instead of trees.
/// Due to the structural sharing, the stored expressions effectively form a directed acyclic graph,
/// represented as an adjacency list in [Arena::exprs].
/// An equivalent identity surface is the canonical prefix notation (see [Arena::prefix_notation]):
/// two expressions are structurally equal iff their prefix notations are equal.
/// Unlike rewriting systems, the arena performs no simplification whatsoever when interning;
/// the exact shape of an expression is its identity.
#[derive(Debug)]
pub(crate) struct Arena {
    /// Stores all expressions in this arena.
    ///
    /// Serves as a fast lookup for an expression, given its identifier.
    /// Expressions are stored in the order of their creation, are never mutated, and are never
    /// removed. Keeping every expression for the whole run potentially requires more memory than
    /// strictly necessary, but avoids explicit reference counting or garbage collection; any
    /// derivation may thus freely refer to any expression for as long as the arena lives.
    pub(crate) exprs: Vec<Expr>,

    /// Maps expressions to their identifiers.
    ///
    /// Serves as a fast inverse lookup for the unique identifier of a given expression.
    /// To simplify ownership, we implement this lookup by mapping from the hash of an expression
    /// to several identifiers: there might be hash collisions, which we address by checking true
    /// equality when reading this map. By interning, at most one of the candidates is equal.
    exprs_inv: FxHashMap<u64, Vec<ExprId>>,

    /// Stores all variable names in this arena.
    ///
    /// Conceptually, this is analogous to [Arena::exprs]: names are appended once and looked up
    /// by identifier when rendering expressions.
    pub(crate) vars: Vec<String>,

    /// Maps variable names to their identifiers.
    ///
    /// The inverse lookup of variables is less complex than [Arena::exprs_inv]:
    /// names are hashed directly and are never mutated after creation.
    vars_inv: FxHashMap<String, VarId>,
}

impl Arena {
    /// Creates a new, empty arena.
    pub(crate) fn new() -> Self {
        Self {
            exprs: Vec::new(),
            exprs_inv: FxHashMap::default(),
            vars: Vec::new(),
            vars_inv: FxHashMap::default(),
        }
    }

    /// Adds a new expression to this arena, returning its new identifier.
    ///
    /// Appends the given expression to [Arena::exprs] and enables its lookup via [Arena::exprs_inv].
    /// Requires that no expression equal to the given expression is already in this arena.
    fn add_expr(&mut self, expr: Expr) -> ExprId {
        let id = self.exprs.len();
        let hash = expr.calc_hash();
        self.exprs.push(expr);
        self.exprs_inv.entry(hash).or_default().push(id);
        id
    }

    /// Looks up the identifier for an expression of this arena.
    ///
    /// The identifier for a given expression is the one that is associated with its hash
    /// and whose expression is also equal to the given expression (see [Arena::exprs_inv]).
    fn get_expr(&self, expr: &Expr) -> Option<ExprId> {
        self.exprs_inv
            .get(&expr.calc_hash())?
            .iter()
            .copied()
            .find(|&id| self.exprs[id] == *expr)
    }

    /// Adds or looks up an expression of this arena, returning its identifier.
    ///
    /// This is the only way to obtain an expression's identifier, which ensures structural sharing:
    /// the expression is added to this arena only if it does not already exist.
    pub(crate) fn expr(&mut self, expr: Expr) -> ExprId {
        self.get_expr(&expr).unwrap_or_else(|| self.add_expr(expr))
    }

    /// Adds a new variable to this arena, returning its identifier.
    ///
    /// Works analogously to [Arena::add_expr] (see [Arena::vars_inv]).
    fn add_var(&mut self, name: &str) -> VarId {
        let id: VarId = self.vars.len().try_into().unwrap();
        self.vars.push(name.to_owned());
        self.vars_inv.insert(name.to_owned(), id);
        id
    }

    /// Looks up the identifier of a variable in this arena.
    fn get_var(&self, name: &str) -> Option<VarId> {
        self.vars_inv.get(name).copied()
    }

    /// Adds or looks up a named variable of this arena, returning its [Var] expression's identifier.
    pub(crate) fn var_expr(&mut self, name: &str) -> ExprId {
        let var_id = self
            .get_var(name)
            .unwrap_or_else(|| self.add_var(name));
        self.expr(Var(var_id))
    }

    /// Walks a component path, returning the expression the path leads to.
    ///
    /// Returns [None] as soon as a step's connective does not match the expression it is applied to.
    /// This is the primitive the axiom matchers and builders destructure schemata with.
    pub(crate) fn component(&self, id: ExprId, path: &[Step]) -> Option<ExprId> {
        let mut id = id;
        for step in path {
            id = match (step, &self.exprs[id]) {
                (Step::AndLeft, And(left, _)) => *left,
                (Step::AndRight, And(_, right)) => *right,
                (Step::OrLeft, Or(left, _)) => *left,
                (Step::OrRight, Or(_, right)) => *right,
                (Step::ImpLeft, Imp(left, _)) => *left,
                (Step::ImpRight, Imp(_, right)) => *right,
                _ => return None,
            };
        }
        Some(id)
    }

    /// Renders the canonical prefix notation of an expression.
    ///
    /// The notation is built from `_|_`, variable names, and the prefix operators `&`, `|` and `->`,
    /// with single spaces between an operator and its operands (e.g. `-> A -> B A` for `A->B->A`).
    /// Two expressions are structurally equal iff their prefix notations are equal, which makes the
    /// notation an identity surface equivalent to the interned identifier.
    pub(crate) fn prefix_notation(&self, id: ExprId) -> String {
        let mut result = String::new();
        self.append_prefix(id, &mut result);
        result
    }

    /// Appends the prefix notation of an expression to a string (see [Arena::prefix_notation]).
    fn append_prefix(&self, id: ExprId, result: &mut String) {
        match &self.exprs[id] {
            Bottom => result.push_str("_|_"),
            Var(var_id) => result.push_str(&self.vars[*var_id as usize]),
            And(left, right) => self.append_prefix_binary("&", *left, *right, result),
            Or(left, right) => self.append_prefix_binary("|", *left, *right, result),
            Imp(left, right) => self.append_prefix_binary("->", *left, *right, result),
        }
    }

    /// Appends the prefix notation of a binary expression to a string (see [Arena::prefix_notation]).
    fn append_prefix_binary(&self, operator: &str, left: ExprId, right: ExprId, result: &mut String) {
        result.push_str(operator);
        result.push(' ');
        self.append_prefix(left, result);
        result.push(' ');
        self.append_prefix(right, result);
    }

    /// Pairs an expression with this arena, so it can be displayed.
    pub(crate) fn expr_ref(&self, id: ExprId) -> ExprRef {
        ExprRef { arena: self, id }
    }

    /// Writes an expression of this arena to a formatter.
    ///
    /// Expressions are rendered in fully-parenthesized infix notation using the tokens
    /// `_|_`, `&`, `|` and `->`: each operand of a binary operator is parenthesized,
    /// variables and falsum are rendered bare.
    fn format_expr(&self, id: ExprId, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.exprs[id] {
            Bottom => write!(f, "_|_"),
            Var(var_id) => write!(f, "{}", self.vars[*var_id as usize]),
            And(left, right) => self.format_binary("&", *left, *right, f),
            Or(left, right) => self.format_binary("|", *left, *right, f),
            Imp(left, right) => self.format_binary("->", *left, *right, f),
        }
    }

    /// Writes a binary expression of this arena to a formatter (see [Arena::format_expr]).
    fn format_binary(
        &self,
        operator: &str,
        left: ExprId,
        right: ExprId,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "(")?;
        self.format_expr(left, f)?;
        write!(f, "){operator}(")?;
        self.format_expr(right, f)?;
        write!(f, ")")
    }
}

/// An expression that is explicitly paired with the arena it is tied to.
///
/// This struct is useful whenever we need to pass an expression around, but the containing arena
/// is not available, for example whenever we want to [fmt::Display] an expression.
pub(crate) struct ExprRef<'a> {
    pub(crate) arena: &'a Arena,
    pub(crate) id: ExprId,
}

/// Displays an expression in an arena.
impl fmt::Display for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.arena.format_expr(self.id, f)
    }
}

/// Debug-formats an expression as its canonical prefix notation.
impl fmt::Debug for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.arena.prefix_notation(self.id))
    }
}
