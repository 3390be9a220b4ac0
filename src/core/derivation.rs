//! Natural-deduction derivations over arena expressions.

use std::fmt;

use super::arena::Arena;
use super::expr::ExprId;

/// Identifier type for derivation nodes.
///
/// Serves as an index into [Derivation::nodes].
pub(crate) type NodeId = usize;

/// A rule of natural deduction for intuitionistic propositional logic with falsum.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Rule {
    /// An axiom leaf: the conclusion is in the context.
    Ax,

    /// Implication introduction, discharging the hypothesis introduced below it.
    IImpl,

    /// Implication elimination (modus ponens).
    EImpl,

    /// Conjunction introduction.
    ICon,

    /// Left conjunction elimination.
    ElCon,

    /// Right conjunction elimination.
    ErCon,

    /// Left disjunction introduction.
    IlDis,

    /// Right disjunction introduction.
    IrDis,

    /// Disjunction elimination (case analysis).
    EDis,

    /// Falsum elimination (ex falso quodlibet).
    EBot,
}

impl Rule {
    /// Returns the annotation this rule is printed with.
    pub(crate) fn annotation(self) -> &'static str {
        match self {
            Rule::Ax => "Ax",
            Rule::IImpl => "I->",
            Rule::EImpl => "E->",
            Rule::ICon => "I&",
            Rule::ElCon => "El&",
            Rule::ErCon => "Er&",
            Rule::IlDis => "Il|",
            Rule::IrDis => "Ir|",
            Rule::EDis => "E|",
            Rule::EBot => "E_|_",
        }
    }

    /// Returns the number of premises this rule derives its conclusion from.
    pub(crate) fn arity(self) -> usize {
        match self {
            Rule::Ax => 0,
            Rule::IImpl | Rule::ElCon | Rule::ErCon | Rule::IlDis | Rule::IrDis | Rule::EBot => 1,
            Rule::EImpl | Rule::ICon => 2,
            Rule::EDis => 3,
        }
    }
}

/// A node of a natural-deduction derivation.
///
/// A node concludes [Node::expr] by applying [Node::rule] to the conclusions of its children.
/// Nodes are immutable after construction and may be shared between derivations (the same
/// sub-derivation can justify several modus-ponens steps), so the nodes of a [Derivation]
/// effectively form a directed acyclic graph, just like the expressions of an arena.
#[derive(Debug)]
pub(crate) struct Node {
    /// The rule this node applies.
    pub(crate) rule: Rule,

    /// A hypothesis entering the context at this node, if any.
    ///
    /// The hypothesis is visible from this node downward and is discharged by an enclosing
    /// [Rule::IImpl] node.
    pub(crate) add_hyp: Option<ExprId>,

    /// The expression this node concludes.
    pub(crate) expr: ExprId,

    /// The premises of this node, [Rule::arity] many.
    pub(crate) children: Vec<NodeId>,
}

/// An arena of natural-deduction nodes.
///
/// Like [Arena], nodes are stored in creation order and never removed, so sub-derivations can be
/// shared freely by identifier without reference counting.
pub(crate) struct Derivation {
    /// Stores all nodes of this derivation.
    pub(crate) nodes: Vec<Node>,
}

impl Derivation {
    /// Creates a new, empty derivation.
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a node to this derivation, returning its identifier.
    pub(crate) fn node(
        &mut self,
        rule: Rule,
        add_hyp: Option<ExprId>,
        expr: ExprId,
        children: Vec<NodeId>,
    ) -> NodeId {
        debug_assert_eq!(children.len(), rule.arity());
        let id = self.nodes.len();
        self.nodes.push(Node {
            rule,
            add_hyp,
            expr,
            children,
        });
        id
    }
}

/// A derivation root paired with everything needed to print it.
///
/// Rendering walks the tree rooted at [DerivationRef::root] in post-order (children first, left to
/// right, parent last) and emits one line per node occurrence:
///
/// ```text
/// [<depth>] <ctx>|-<conclusion> [<annotation>]
/// ```
///
/// where depth is 0 at the root and increases toward the leaves, and ctx lists the initial context
/// followed by the hypotheses introduced on the ancestor path, in insertion order. A node shared
/// between several parents is printed once per occurrence.
pub(crate) struct DerivationRef<'a> {
    pub(crate) derivation: &'a Derivation,
    pub(crate) arena: &'a Arena,
    pub(crate) root: NodeId,
    pub(crate) context: &'a [ExprId],
}

impl DerivationRef<'_> {
    /// Writes the sub-tree below a node to a formatter (see [DerivationRef]).
    fn format_node(
        &self,
        id: NodeId,
        depth: usize,
        context: &mut Vec<ExprId>,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let node = &self.derivation.nodes[id];
        if let Some(hypothesis) = node.add_hyp {
            context.push(hypothesis);
        }
        for child in &node.children {
            self.format_node(*child, depth + 1, context, f)?;
        }
        write!(f, "[{depth}] ")?;
        for (i, hypothesis) in context.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.arena.expr_ref(*hypothesis))?;
        }
        writeln!(
            f,
            "|-{} [{}]",
            self.arena.expr_ref(node.expr),
            node.rule.annotation()
        )?;
        if node.add_hyp.is_some() {
            context.pop();
        }
        Ok(())
    }
}

/// Displays a derivation as its post-order dump.
impl fmt::Display for DerivationRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut context = self.context.to_vec();
        self.format_node(self.root, 0, &mut context, f)
    }
}
