//! Style-preserving update engine for Wilson-Devinney (WD) input files.
//!
//! A WD input file is a fixed-layout, whitespace-tokenized table read by
//! a format-sensitive Fortran solver. The rendering of every numeric
//! token is part of the contract: fixed vs. scientific notation, the
//! fractional precision, the legacy `D`/`d` exponent marker and an
//! explicit exponent plus sign all have to survive an edit. This crate
//! resolves human parameter names to canonical WD symbols, locates their
//! tokens, and rewrites values while reproducing each token's original
//! style.
//!
//! This crate does no I/O. Sessions, persistence, and any translation
//! front end live elsewhere.

pub mod alias;
pub mod constants;
pub mod directory;
pub mod document;
pub mod engine;
pub mod request;
pub mod style;

pub use alias::AliasResolver;
pub use constants::{DEFAULT_SCI_PRECISION, EXPONENT_DIGITS, EXPONENT_MARKERS, TOKEN_SEPARATOR};
pub use directory::{Location, ParameterDirectory};
pub use document::Document;
pub use engine::{ParseFailure, UpdateEngine, UpdateOutcome, UpdateStatus};
pub use request::{NumberLike, UpdateMode, UpdateRequest};
pub use style::{NumericStyle, Rendered, normalize_exponent, parse_numeric};
