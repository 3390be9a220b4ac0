//! Incremental verification of Hilbert-style proofs.

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;

use super::arena::Arena;
use super::axioms;
use super::derivation::{Derivation, NodeId, Rule};
use super::expr::{Expr, ExprId};
use super::judgement::Judgement;

/// Why a proof was rejected.
///
/// Rejections are ordinary program output, not errors: a rejected proof is a correctly processed
/// input (the run still exits successfully).
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The last proof line differs from the goal of the judgement.
    GoalMismatch,

    /// A proof line is neither a hypothesis, nor an axiom instance, nor a modus-ponens conclusion.
    ///
    /// Carries the 1-based input line number of the offending line, counting the judgement line
    /// as line 1 (so the first proof line is line 2).
    UnjustifiedLine(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::GoalMismatch => {
                write!(f, "The proof does not prove the required expression")
            }
            Rejection::UnjustifiedLine(line) => write!(f, "Proof is incorrect at line {line}"),
        }
    }
}

/// Classifies each proof line and splices the resulting derivations together.
///
/// The verifier makes a single pass over the proof. For each line it decides, in this order,
/// whether the line is a precomputed modus-ponens conclusion, a hypothesis, or an axiom instance
/// (first schema by number wins); a line that is none of the three rejects the proof.
/// After a line is classified, the two modus-ponens tables are updated, so that checking a later
/// conclusion is a single map lookup. Together the tables express: the moment both `a` and
/// `a -> b` have been proven, a derivation of `b` is ready. This keeps the whole verification
/// linear in the size of the proof; re-scanning earlier lines for a matching implication at each
/// step would be quadratic.
pub(crate) struct Verifier {
    /// Maps each proven expression to the derivation node concluding it.
    ///
    /// Populated in line order; the first derivation of an expression is kept, duplicates of an
    /// already-proven line do not replace it.
    encountered: FxHashMap<ExprId, NodeId>,

    /// Maps an expression to the modus-ponens node that proves it, ready for when it is encountered.
    ///
    /// An entry for `b` exists once some proven line `a -> b` has its antecedent `a` proven as
    /// well. The first such node is kept; later derivations of the same conclusion do not replace
    /// it.
    precalc_mp: FxHashMap<ExprId, NodeId>,

    /// Maps an antecedent to the proven implications still waiting for it.
    ///
    /// A proven line `a -> b` whose antecedent `a` has not been proven yet is parked here under
    /// `a`; the list is drained into [Verifier::precalc_mp] as soon as `a` is proven.
    awaiting_lhs: FxHashMap<ExprId, Vec<ExprId>>,
}

impl Verifier {
    /// Creates a verifier with empty tables.
    pub(crate) fn new() -> Self {
        Self {
            encountered: FxHashMap::default(),
            precalc_mp: FxHashMap::default(),
            awaiting_lhs: FxHashMap::default(),
        }
    }

    /// Checks a proof against a judgement, returning the derivation node for the goal.
    ///
    /// A proof whose last line differs from the goal (or an empty proof) is rejected before any
    /// line is classified.
    pub(crate) fn check(
        mut self,
        arena: &mut Arena,
        derivation: &mut Derivation,
        judgement: &Judgement,
        proof: &[ExprId],
    ) -> Result<NodeId, Rejection> {
        if proof.last() != Some(&judgement.goal) {
            return Err(Rejection::GoalMismatch);
        }
        for (index, &line) in proof.iter().enumerate() {
            let node = self
                .classify(arena, derivation, judgement, line)
                .ok_or(Rejection::UnjustifiedLine(index + 2))?;
            self.encountered.entry(line).or_insert(node);
            self.register_implication(arena, derivation, line);
            self.resolve_awaiting(arena, derivation, line);
        }
        Ok(self.encountered[&judgement.goal])
    }

    /// Decides which justification proves a line, returning its derivation node.
    ///
    /// A precomputed modus ponens takes priority over a hypothesis, which takes priority over an
    /// axiom instance.
    fn classify(
        &self,
        arena: &mut Arena,
        derivation: &mut Derivation,
        judgement: &Judgement,
        line: ExprId,
    ) -> Option<NodeId> {
        if let Some(&node) = self.precalc_mp.get(&line) {
            return Some(node);
        }
        if judgement.assumes(line) {
            return Some(derivation.node(Rule::Ax, None, line, vec![]));
        }
        axioms::derive_axiom(arena, derivation, line)
    }

    /// Registers a freshly proven implication with the modus-ponens tables.
    ///
    /// If the antecedent is already proven, the conclusion's modus-ponens node is precomputed
    /// right away; otherwise the implication is parked until the antecedent shows up.
    fn register_implication(&mut self, arena: &Arena, derivation: &mut Derivation, line: ExprId) {
        let Expr::Imp(lhs, rhs) = arena.exprs[line] else {
            return;
        };
        match self.encountered.get(&lhs) {
            Some(&antecedent) => {
                if let Entry::Vacant(entry) = self.precalc_mp.entry(rhs) {
                    let implication = self.encountered[&line];
                    entry.insert(derivation.node(
                        Rule::EImpl,
                        None,
                        rhs,
                        vec![implication, antecedent],
                    ));
                }
            }
            None => self.awaiting_lhs.entry(lhs).or_default().push(line),
        }
    }

    /// Precomputes the conclusions of implications that were waiting for this line as antecedent.
    fn resolve_awaiting(&mut self, arena: &Arena, derivation: &mut Derivation, line: ExprId) {
        let Some(implications) = self.awaiting_lhs.remove(&line) else {
            return;
        };
        let antecedent = self.encountered[&line];
        for implication in implications {
            let Expr::Imp(_, rhs) = arena.exprs[implication] else {
                unreachable!()
            };
            if let Entry::Vacant(entry) = self.precalc_mp.entry(rhs) {
                let implication_node = self.encountered[&implication];
                entry.insert(derivation.node(
                    Rule::EImpl,
                    None,
                    rhs,
                    vec![implication_node, antecedent],
                ));
            }
        }
    }
}
