//! natty translates Hilbert-style propositional proofs into natural-deduction derivations.
//!
//! * The input is a judgement `Γ |- φ` followed by one proof expression per line; each line must
//!   be a hypothesis, an instance of one of ten axiom schemata, or a modus-ponens conclusion.
//! * natty should be called from a binary crate via [shell::main], use in library crates is not intended.
//! * As a starting point in this documentation, see [core::arena::Arena] and [core::verifier::Verifier] for the important algorithms.

#![allow(rustdoc::private_intra_doc_links)]

mod core;
mod panic;
mod parser;
pub mod shell;
mod util;
