//! Core data structures and algorithms for proof checking and translation.

pub(crate) mod arena;
pub(crate) mod axioms;
pub(crate) mod derivation;
pub(crate) mod expr;
pub(crate) mod judgement;
pub(crate) mod verifier;
