//! Parser for judgement and proof lines.

use std::fmt;

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::core::arena::Arena;
use crate::core::expr::{Expr, ExprId};

/// Parses the expressions and judgement lines of a Hilbert-style proof.
#[derive(Parser)]
#[grammar = "parser/proof.pest"]
pub(crate) struct ProofParser;

/// An input that could not be parsed.
#[derive(Debug)]
pub(crate) enum ParseError {
    /// The input ended before a judgement line.
    MissingJudgement,

    /// A line that does not match the expression or judgement grammar.
    Malformed(Box<pest::error::Error<Rule>>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingJudgement => write!(f, "judgement line expected"),
            ParseError::Malformed(error) => write!(f, "{error}"),
        }
    }
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(error: pest::error::Error<Rule>) -> Self {
        ParseError::Malformed(Box::new(error))
    }
}

/// Parses a judgement line, returning the hypotheses in input order and the goal.
pub(crate) fn parse_judgement(
    line: &str,
    arena: &mut Arena,
) -> Result<(Vec<ExprId>, ExprId), ParseError> {
    let pair = ProofParser::parse(Rule::judgement, line)?.next().unwrap();
    let mut exprs: Vec<ExprId> = pair
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::expression)
        .map(|pair| parse_pair(pair, arena))
        .collect();
    let goal = exprs.pop().unwrap();
    Ok((exprs, goal))
}

/// Parses a single proof line, returning the expression it contains.
pub(crate) fn parse_expression(line: &str, arena: &mut Arena) -> Result<ExprId, ParseError> {
    let pair = ProofParser::parse(Rule::proof_line, line)?.next().unwrap();
    let expression = pair.into_inner().next().unwrap();
    Ok(parse_pair(expression, arena))
}

/// Interns the expression a pair stands for, recursively.
///
/// Operator chains fold left for `&` and `|`; implication nests to the right through the
/// grammar's own recursion. Negation is elaborated into an implication of falsum.
fn parse_pair(pair: Pair<Rule>, arena: &mut Arena) -> ExprId {
    match pair.as_rule() {
        Rule::expression => {
            let mut inner = pair.into_inner();
            let lhs = parse_pair(inner.next().unwrap(), arena);
            match inner.next() {
                Some(consequent) => {
                    let rhs = parse_pair(consequent, arena);
                    arena.expr(Expr::Imp(lhs, rhs))
                }
                None => lhs,
            }
        }
        Rule::disjunction => {
            let mut inner = pair.into_inner();
            let mut id = parse_pair(inner.next().unwrap(), arena);
            for operand in inner {
                let rhs = parse_pair(operand, arena);
                id = arena.expr(Expr::Or(id, rhs));
            }
            id
        }
        Rule::conjunction => {
            let mut inner = pair.into_inner();
            let mut id = parse_pair(inner.next().unwrap(), arena);
            for operand in inner {
                let rhs = parse_pair(operand, arena);
                id = arena.expr(Expr::And(id, rhs));
            }
            id
        }
        Rule::negation => {
            let operand = parse_pair(pair.into_inner().next().unwrap(), arena);
            let bottom = arena.expr(Expr::Bottom);
            arena.expr(Expr::Imp(operand, bottom))
        }
        Rule::bottom => arena.expr(Expr::Bottom),
        Rule::variable => arena.var_expr(pair.as_str()),
        _ => unreachable!(),
    }
}
