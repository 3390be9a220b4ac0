//! The ten axiom schemata: shape matching and derivation building.
//!
//! Each schema k comes as a pair of functions: `match_axk` decides whether an expression
//! instantiates the schema, and `build_axk` produces the fixed natural-deduction sub-tree
//! concluding such an instance from no hypotheses. The builders assume their matcher holds;
//! component lookups that a successful match guarantees are therefore unwrapped.

use super::arena::Arena;
use super::derivation::{Derivation, NodeId, Rule};
use super::expr::{Expr, ExprId, Step};
use Step::{AndLeft, AndRight, ImpLeft, ImpRight, OrLeft, OrRight};

/// A schema matcher: decides whether an expression instantiates one schema.
type MatchFn = fn(&Arena, ExprId) -> bool;

/// A schema builder: derives an instance of one schema from no hypotheses.
type BuildFn = fn(&mut Arena, &mut Derivation, ExprId) -> NodeId;

/// The ten schemata in matching order.
const SCHEMATA: [(MatchFn, BuildFn); 10] = [
    (match_ax1, build_ax1),
    (match_ax2, build_ax2),
    (match_ax3, build_ax3),
    (match_ax4, build_ax4),
    (match_ax5, build_ax5),
    (match_ax6, build_ax6),
    (match_ax7, build_ax7),
    (match_ax8, build_ax8),
    (match_ax9, build_ax9),
    (match_ax10, build_ax10),
];

/// Returns the 1-based number of the first schema the expression instantiates.
///
/// An expression can instantiate more than one schema (e.g. every instance of schema 9 also
/// instantiates schema 2 with its third metavariable set to falsum); the scan order makes the
/// choice deterministic.
pub(crate) fn match_axiom(arena: &Arena, expr: ExprId) -> Option<usize> {
    SCHEMATA
        .iter()
        .position(|(matches, _)| matches(arena, expr))
        .map(|index| index + 1)
}

/// Builds the derivation for the first schema the expression instantiates, if any.
pub(crate) fn derive_axiom(
    arena: &mut Arena,
    derivation: &mut Derivation,
    expr: ExprId,
) -> Option<NodeId> {
    let (_, build) = SCHEMATA[match_axiom(arena, expr)? - 1];
    Some(build(arena, derivation, expr))
}

/// Returns whether the given component is the falsum constant.
fn is_bottom(arena: &Arena, component: Option<ExprId>) -> bool {
    component.is_some_and(|id| arena.exprs[id] == Expr::Bottom)
}

/// Matches `a -> b -> a`.
pub(crate) fn match_ax1(arena: &Arena, expr: ExprId) -> bool {
    let a1 = arena.component(expr, &[ImpLeft]);
    let a2 = arena.component(expr, &[ImpRight, ImpRight]);
    a1.is_some() && a1 == a2
}

/// Matches `(a -> b) -> (a -> b -> y) -> (a -> y)`.
pub(crate) fn match_ax2(arena: &Arena, expr: ExprId) -> bool {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a1 = arena.component(expr, &[L, L]);
    let b1 = arena.component(expr, &[L, R]);
    let a2 = arena.component(expr, &[R, L, L]);
    let b2 = arena.component(expr, &[R, L, R, L]);
    let y1 = arena.component(expr, &[R, L, R, R]);
    let a3 = arena.component(expr, &[R, R, L]);
    let y2 = arena.component(expr, &[R, R, R]);
    a1.is_some() && a1 == a2 && a2 == a3 && b1.is_some() && b1 == b2 && y1.is_some() && y1 == y2
}

/// Matches `a -> b -> a & b`.
pub(crate) fn match_ax3(arena: &Arena, expr: ExprId) -> bool {
    let a1 = arena.component(expr, &[ImpLeft]);
    let b1 = arena.component(expr, &[ImpRight, ImpLeft]);
    let a2 = arena.component(expr, &[ImpRight, ImpRight, AndLeft]);
    let b2 = arena.component(expr, &[ImpRight, ImpRight, AndRight]);
    a1.is_some() && a1 == a2 && b1.is_some() && b1 == b2
}

/// Matches `a & b -> a`.
pub(crate) fn match_ax4(arena: &Arena, expr: ExprId) -> bool {
    let a1 = arena.component(expr, &[ImpLeft, AndLeft]);
    let a2 = arena.component(expr, &[ImpRight]);
    a1.is_some() && a1 == a2
}

/// Matches `a & b -> b`.
pub(crate) fn match_ax5(arena: &Arena, expr: ExprId) -> bool {
    let b1 = arena.component(expr, &[ImpLeft, AndRight]);
    let b2 = arena.component(expr, &[ImpRight]);
    b1.is_some() && b1 == b2
}

/// Matches `a -> a | b`.
pub(crate) fn match_ax6(arena: &Arena, expr: ExprId) -> bool {
    let a1 = arena.component(expr, &[ImpLeft]);
    let a2 = arena.component(expr, &[ImpRight, OrLeft]);
    a1.is_some() && a1 == a2
}

/// Matches `b -> a | b`.
pub(crate) fn match_ax7(arena: &Arena, expr: ExprId) -> bool {
    let b1 = arena.component(expr, &[ImpLeft]);
    let b2 = arena.component(expr, &[ImpRight, OrRight]);
    b1.is_some() && b1 == b2
}

/// Matches `(a -> y) -> (b -> y) -> (a | b -> y)`.
pub(crate) fn match_ax8(arena: &Arena, expr: ExprId) -> bool {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a1 = arena.component(expr, &[L, L]);
    let y1 = arena.component(expr, &[L, R]);
    let b1 = arena.component(expr, &[R, L, L]);
    let y2 = arena.component(expr, &[R, L, R]);
    let a2 = arena.component(expr, &[R, R, L, OrLeft]);
    let b2 = arena.component(expr, &[R, R, L, OrRight]);
    let y3 = arena.component(expr, &[R, R, R]);
    a1.is_some()
        && a1 == a2
        && b1.is_some()
        && b1 == b2
        && y1.is_some()
        && y1 == y2
        && y2 == y3
}

/// Matches `(a -> b) -> (a -> b -> _|_) -> (a -> _|_)`.
pub(crate) fn match_ax9(arena: &Arena, expr: ExprId) -> bool {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a1 = arena.component(expr, &[L, L]);
    let b1 = arena.component(expr, &[L, R]);
    let a2 = arena.component(expr, &[R, L, L]);
    let b2 = arena.component(expr, &[R, L, R, L]);
    let bot1 = arena.component(expr, &[R, L, R, R]);
    let a3 = arena.component(expr, &[R, R, L]);
    let bot2 = arena.component(expr, &[R, R, R]);
    a1.is_some()
        && a1 == a2
        && a2 == a3
        && b1.is_some()
        && b1 == b2
        && is_bottom(arena, bot1)
        && is_bottom(arena, bot2)
}

/// Matches `a -> (a -> _|_) -> b`.
pub(crate) fn match_ax10(arena: &Arena, expr: ExprId) -> bool {
    let a1 = arena.component(expr, &[ImpLeft]);
    let a2 = arena.component(expr, &[ImpRight, ImpLeft, ImpLeft]);
    let bot = arena.component(expr, &[ImpRight, ImpLeft, ImpRight]);
    a1.is_some() && a1 == a2 && is_bottom(arena, bot)
}

/// Builds the derivation of an instance of `a -> b -> a`.
///
/// Introduces `a`, then `b`, and concludes `a` as an axiom.
pub(crate) fn build_ax1(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let a = arena.component(expr, &[ImpLeft]).unwrap();
    let b_imp_a = arena.component(expr, &[ImpRight]).unwrap();
    let b = arena.component(expr, &[ImpRight, ImpLeft]).unwrap();
    let axiom = derivation.node(Rule::Ax, Some(b), a, vec![]);
    let inner = derivation.node(Rule::IImpl, Some(a), b_imp_a, vec![axiom]);
    derivation.node(Rule::IImpl, None, expr, vec![inner])
}

/// Builds the derivation of an instance of `(a -> b) -> (a -> b -> y) -> (a -> y)`.
///
/// Introduces the antecedents `a -> b`, `a -> b -> y` and `a`, then concludes `y` by two
/// modus-ponens steps.
pub(crate) fn build_ax2(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a_imp_b = arena.component(expr, &[L]).unwrap();
    let rest = arena.component(expr, &[R]).unwrap();
    let a_imp_b_imp_y = arena.component(expr, &[R, L]).unwrap();
    let a_imp_y = arena.component(expr, &[R, R]).unwrap();
    let a = arena.component(expr, &[L, L]).unwrap();
    let b = arena.component(expr, &[L, R]).unwrap();
    let b_imp_y = arena.component(expr, &[R, L, R]).unwrap();
    let y = arena.component(expr, &[R, R, R]).unwrap();
    let major = derivation.node(Rule::Ax, None, a_imp_b_imp_y, vec![]);
    let minor = derivation.node(Rule::Ax, None, a, vec![]);
    let step_b_imp_y = derivation.node(Rule::EImpl, None, b_imp_y, vec![major, minor]);
    let major = derivation.node(Rule::Ax, None, a_imp_b, vec![]);
    let minor = derivation.node(Rule::Ax, None, a, vec![]);
    let step_b = derivation.node(Rule::EImpl, None, b, vec![major, minor]);
    let step_y = derivation.node(Rule::EImpl, Some(a), y, vec![step_b_imp_y, step_b]);
    let inner = derivation.node(Rule::IImpl, Some(a_imp_b_imp_y), a_imp_y, vec![step_y]);
    let outer = derivation.node(Rule::IImpl, Some(a_imp_b), rest, vec![inner]);
    derivation.node(Rule::IImpl, None, expr, vec![outer])
}

/// Builds the derivation of an instance of `a -> b -> a & b`.
///
/// Introduces `a` and `b`, then concludes the conjunction by introduction.
pub(crate) fn build_ax3(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let b_imp_ab = arena.component(expr, &[ImpRight]).unwrap();
    let a_and_b = arena.component(expr, &[ImpRight, ImpRight]).unwrap();
    let a = arena.component(expr, &[ImpRight, ImpRight, AndLeft]).unwrap();
    let b = arena.component(expr, &[ImpRight, ImpRight, AndRight]).unwrap();
    let left = derivation.node(Rule::Ax, None, a, vec![]);
    let right = derivation.node(Rule::Ax, None, b, vec![]);
    let both = derivation.node(Rule::ICon, Some(b), a_and_b, vec![left, right]);
    let inner = derivation.node(Rule::IImpl, Some(a), b_imp_ab, vec![both]);
    derivation.node(Rule::IImpl, None, expr, vec![inner])
}

/// Builds the derivation of an instance of `a & b -> a`.
///
/// Introduces the conjunction and concludes its left operand by elimination.
pub(crate) fn build_ax4(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let a_and_b = arena.component(expr, &[ImpLeft]).unwrap();
    let a = arena.component(expr, &[ImpRight]).unwrap();
    let axiom = derivation.node(Rule::Ax, None, a_and_b, vec![]);
    let left = derivation.node(Rule::ElCon, Some(a_and_b), a, vec![axiom]);
    derivation.node(Rule::IImpl, None, expr, vec![left])
}

/// Builds the derivation of an instance of `a & b -> b`.
///
/// Symmetric to [build_ax4], with right conjunction elimination.
pub(crate) fn build_ax5(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let a_and_b = arena.component(expr, &[ImpLeft]).unwrap();
    let b = arena.component(expr, &[ImpRight]).unwrap();
    let axiom = derivation.node(Rule::Ax, None, a_and_b, vec![]);
    let right = derivation.node(Rule::ErCon, Some(a_and_b), b, vec![axiom]);
    derivation.node(Rule::IImpl, None, expr, vec![right])
}

/// Builds the derivation of an instance of `a -> a | b`.
///
/// Introduces `a` and concludes the disjunction by left introduction.
pub(crate) fn build_ax6(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let a = arena.component(expr, &[ImpLeft]).unwrap();
    let a_or_b = arena.component(expr, &[ImpRight]).unwrap();
    let axiom = derivation.node(Rule::Ax, None, a, vec![]);
    let left = derivation.node(Rule::IlDis, Some(a), a_or_b, vec![axiom]);
    derivation.node(Rule::IImpl, None, expr, vec![left])
}

/// Builds the derivation of an instance of `b -> a | b`.
///
/// Symmetric to [build_ax6], with right disjunction introduction.
pub(crate) fn build_ax7(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let b = arena.component(expr, &[ImpLeft]).unwrap();
    let a_or_b = arena.component(expr, &[ImpRight]).unwrap();
    let axiom = derivation.node(Rule::Ax, None, b, vec![]);
    let right = derivation.node(Rule::IrDis, Some(b), a_or_b, vec![axiom]);
    derivation.node(Rule::IImpl, None, expr, vec![right])
}

/// Builds the derivation of an instance of `(a -> y) -> (b -> y) -> (a | b -> y)`.
///
/// Introduces the two branch implications and the disjunction, then concludes `y` by case
/// analysis, each case closed by modus ponens.
pub(crate) fn build_ax8(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a_imp_y = arena.component(expr, &[L]).unwrap();
    let rest = arena.component(expr, &[R]).unwrap();
    let b_imp_y = arena.component(expr, &[R, L]).unwrap();
    let ab_imp_y = arena.component(expr, &[R, R]).unwrap();
    let a_or_b = arena.component(expr, &[R, R, L]).unwrap();
    let a = arena.component(expr, &[R, R, L, OrLeft]).unwrap();
    let b = arena.component(expr, &[R, R, L, OrRight]).unwrap();
    let y = arena.component(expr, &[R, R, R]).unwrap();
    let major = derivation.node(Rule::Ax, None, a_imp_y, vec![]);
    let minor = derivation.node(Rule::Ax, None, a, vec![]);
    let left_case = derivation.node(Rule::EImpl, Some(a), y, vec![major, minor]);
    let major = derivation.node(Rule::Ax, None, b_imp_y, vec![]);
    let minor = derivation.node(Rule::Ax, None, b, vec![]);
    let right_case = derivation.node(Rule::EImpl, Some(b), y, vec![major, minor]);
    let scrutinee = derivation.node(Rule::Ax, None, a_or_b, vec![]);
    let cases = derivation.node(
        Rule::EDis,
        Some(a_or_b),
        y,
        vec![left_case, right_case, scrutinee],
    );
    let inner = derivation.node(Rule::IImpl, Some(b_imp_y), ab_imp_y, vec![cases]);
    let outer = derivation.node(Rule::IImpl, Some(a_imp_y), rest, vec![inner]);
    derivation.node(Rule::IImpl, None, expr, vec![outer])
}

/// Builds the derivation of an instance of `(a -> b) -> (a -> b -> _|_) -> (a -> _|_)`.
///
/// Parallel to [build_ax2] with the third metavariable fixed to falsum.
pub(crate) fn build_ax9(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    const L: Step = ImpLeft;
    const R: Step = ImpRight;
    let a_imp_b = arena.component(expr, &[L]).unwrap();
    let rest = arena.component(expr, &[R]).unwrap();
    let refutation = arena.component(expr, &[R, L]).unwrap();
    let a_imp_bot = arena.component(expr, &[R, R]).unwrap();
    let a = arena.component(expr, &[L, L]).unwrap();
    let b = arena.component(expr, &[L, R]).unwrap();
    let b_imp_bot = arena.component(expr, &[R, L, R]).unwrap();
    let bottom = arena.component(expr, &[R, R, R]).unwrap();
    let major = derivation.node(Rule::Ax, None, refutation, vec![]);
    let minor = derivation.node(Rule::Ax, None, a, vec![]);
    let step_b_imp_bot = derivation.node(Rule::EImpl, None, b_imp_bot, vec![major, minor]);
    let major = derivation.node(Rule::Ax, None, a_imp_b, vec![]);
    let minor = derivation.node(Rule::Ax, None, a, vec![]);
    let step_b = derivation.node(Rule::EImpl, None, b, vec![major, minor]);
    let step_bot = derivation.node(Rule::EImpl, Some(a), bottom, vec![step_b_imp_bot, step_b]);
    let inner = derivation.node(Rule::IImpl, Some(refutation), a_imp_bot, vec![step_bot]);
    let outer = derivation.node(Rule::IImpl, Some(a_imp_b), rest, vec![inner]);
    derivation.node(Rule::IImpl, None, expr, vec![outer])
}

/// Builds the derivation of an instance of `a -> (a -> _|_) -> b`.
///
/// Introduces `a` and its refutation, derives falsum by modus ponens, and concludes `b` through
/// falsum elimination under the interned auxiliary implication `_|_ -> b`.
pub(crate) fn build_ax10(arena: &mut Arena, derivation: &mut Derivation, expr: ExprId) -> NodeId {
    let a = arena.component(expr, &[ImpLeft]).unwrap();
    let rest = arena.component(expr, &[ImpRight]).unwrap();
    let refutation = arena.component(expr, &[ImpRight, ImpLeft]).unwrap();
    let b = arena.component(expr, &[ImpRight, ImpRight]).unwrap();
    let bottom = arena.component(expr, &[ImpRight, ImpLeft, ImpRight]).unwrap();
    let bottom_imp_b = arena.expr(Expr::Imp(bottom, b));
    let axiom = derivation.node(Rule::Ax, None, bottom, vec![]);
    let absurd = derivation.node(Rule::EBot, Some(bottom), b, vec![axiom]);
    let major = derivation.node(Rule::IImpl, None, bottom_imp_b, vec![absurd]);
    let contradiction_major = derivation.node(Rule::Ax, None, refutation, vec![]);
    let contradiction_minor = derivation.node(Rule::Ax, None, a, vec![]);
    let minor = derivation.node(
        Rule::EImpl,
        None,
        bottom,
        vec![contradiction_major, contradiction_minor],
    );
    let step_b = derivation.node(Rule::EImpl, Some(refutation), b, vec![major, minor]);
    let inner = derivation.node(Rule::IImpl, Some(a), rest, vec![step_b]);
    derivation.node(Rule::IImpl, None, expr, vec![inner])
}
