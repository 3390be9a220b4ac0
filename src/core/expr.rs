//! Defines expressions in an arena.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Identifier type for expressions.
///
/// Serves as an index into [super::arena::Arena::exprs].
/// Because the arena interns every distinct expression exactly once,
/// two expressions are structurally equal iff their identifiers are equal.
pub(crate) type ExprId = usize;

/// Identifier type for variables.
///
/// Serves as an index into [super::arena::Arena::vars].
/// We do not expect too many variables, so a 32-bit integer suffices.
pub(crate) type VarId = u32;

/// An expression of propositional logic with falsum.
///
/// An expression is always implicitly tied to an [super::arena::Arena], to which its [ExprId]s and [VarId] refer.
/// Negation is not represented: the parser elaborates `!a` into `a -> _|_`.
/// We derive the default equality check and hashing algorithm here:
/// this is sensible because the arena guarantees that each sub-expression has exactly one identifier,
/// so a shallow equality check or hash is equivalent to a deep one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum Expr {
    /// The constant falsum.
    Bottom,

    /// A propositional variable.
    Var(VarId),

    /// A conjunction of two expressions.
    And(ExprId, ExprId),

    /// A disjunction of two expressions.
    Or(ExprId, ExprId),

    /// An implication between two expressions.
    Imp(ExprId, ExprId),
}

impl Expr {
    /// Calculates the hash of this expression.
    ///
    /// Used to look up an expression's identifier in [super::arena::Arena::exprs_inv].
    pub(super) fn calc_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// A single step of a component path.
///
/// Each step descends into one operand of one connective and fails on any other expression.
/// A slice of steps describes a navigation such as "left of the implication, then right of the conjunction",
/// which is the primitive the axiom schemata are matched and destructured with (see [super::axioms]).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Step {
    /// Descends into the left operand of a conjunction.
    AndLeft,

    /// Descends into the right operand of a conjunction.
    AndRight,

    /// Descends into the left operand of a disjunction.
    OrLeft,

    /// Descends into the right operand of a disjunction.
    OrRight,

    /// Descends into the antecedent of an implication.
    ImpLeft,

    /// Descends into the consequent of an implication.
    ImpRight,
}
