//! The judgement a proof is checked against.

use rustc_hash::FxHashSet;

use super::expr::ExprId;

/// A judgement, that is, a hypothesis context together with a goal expression.
///
/// Hypotheses are deduplicated by structural equality (which is identifier equality, see
/// [super::arena::Arena]), while their first-occurrence input order is preserved for display.
pub(crate) struct Judgement {
    /// The hypotheses in input order, without duplicates.
    pub(crate) hypotheses: Vec<ExprId>,

    /// The hypotheses as a set, for constant-time membership tests.
    hypothesis_set: FxHashSet<ExprId>,

    /// The expression the proof is required to prove.
    pub(crate) goal: ExprId,
}

impl Judgement {
    /// Creates a judgement from the parsed hypothesis list and goal.
    pub(crate) fn new(hypotheses: Vec<ExprId>, goal: ExprId) -> Self {
        let mut hypothesis_set = FxHashSet::default();
        let mut ordered = Vec::new();
        for hypothesis in hypotheses {
            if hypothesis_set.insert(hypothesis) {
                ordered.push(hypothesis);
            }
        }
        Self {
            hypotheses: ordered,
            hypothesis_set,
            goal,
        }
    }

    /// Returns whether the given expression is a hypothesis of this judgement.
    pub(crate) fn assumes(&self, expr: ExprId) -> bool {
        self.hypothesis_set.contains(&expr)
    }
}
