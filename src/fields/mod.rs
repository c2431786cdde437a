//! Field Table model.
//!
//! A field table is an ordered list of [`FieldDefinition`]s plus the set of
//! keys that receive generated salts. It is validated once when constructed
//! and then only read by the resolver.

pub mod builtin;
mod model;
mod table;

#[cfg(test)]
mod tests;

pub use model::{
    AfterHook, ComputeFn, DefaultContext, DefaultValue, FieldDefinition, QuestionType, Requires,
    Value, strip_non_alphanumerics,
};
pub use table::FieldTable;
