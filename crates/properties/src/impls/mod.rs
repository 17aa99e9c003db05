//! Builtin property declarations.

pub(crate) mod constraints;
pub(crate) mod node;
