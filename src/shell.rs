//! Imperative shell for checking proofs and emitting derivations.

use std::fmt::Write;
use std::process::exit;

use clap::Parser;

use crate::core::arena::Arena;
use crate::core::derivation::{Derivation, DerivationRef};
use crate::core::judgement::Judgement;
use crate::core::verifier::Verifier;
use crate::parser::{self, ParseError};
use crate::{panic, util};

/// Translates a Hilbert-style propositional proof into a natural-deduction derivation.
///
/// The input starts with a judgement line `hypotheses |- goal`, followed by one proof expression
/// per line. The output is the post-order dump of the natural-deduction derivation, or a single
/// line explaining why the proof was rejected.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// File holding the judgement and proof lines, - for standard input.
    #[arg(default_value = "-")]
    input: String,
}

/// Main entry point.
///
/// Reads the input, checks the proof, and prints the result. Malformed or unreadable input is
/// reported on standard error with a nonzero exit code; a rejected proof is regular output.
pub fn main() {
    panic::install_panic_hook();
    let cli = Cli::parse();
    let input = match util::read_input(&cli.input) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("cannot read {}: {error}", cli.input);
            exit(1);
        }
    };
    match run(&input) {
        Ok(output) => print!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    }
}

/// Checks the proof in the given input and renders the result.
///
/// The first non-blank line is the judgement, every further non-blank line one proof expression.
/// Returns the program output for well-formed input (the derivation dump or the rejection line);
/// parse failures are returned as errors.
pub(crate) fn run(input: &str) -> Result<String, ParseError> {
    let mut arena = Arena::new();
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    let judgement_line = lines.next().ok_or(ParseError::MissingJudgement)?;
    let (hypotheses, goal) = parser::parse_judgement(judgement_line, &mut arena)?;
    let judgement = Judgement::new(hypotheses, goal);
    let mut proof = Vec::new();
    for line in lines {
        proof.push(parser::parse_expression(line, &mut arena)?);
    }
    let mut derivation = Derivation::new();
    let mut output = String::new();
    match Verifier::new().check(&mut arena, &mut derivation, &judgement, &proof) {
        Ok(root) => write!(
            output,
            "{}",
            DerivationRef {
                derivation: &derivation,
                arena: &arena,
                root,
                context: &judgement.hypotheses,
            }
        )
        .unwrap(),
        Err(rejection) => writeln!(output, "{rejection}").unwrap(),
    }
    Ok(output)
}
