//! cohorte-formula
//!
//! Computed-field evaluation. A computed field carries its formula in its
//! unit string (`CALCULE:<formula>|<var1>,<var2>`); this crate parses that
//! encoding, parses the formula into a typed AST and evaluates it against the
//! values entered so far. Public entry points never fail: anything that
//! cannot produce a finite number degrades to `None`, rendered as blank.

pub mod ast;
pub mod calculate;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod spec;

pub use ast::Formula;
pub use calculate::{
    calculate_field_value, evaluate, format_calculated_value, format_default,
    recompute_computed_fields, ComputedValue,
};
pub use spec::{encode_spec, parse_spec, validate_spec, ComputedFieldSpec, SPEC_PREFIX};
