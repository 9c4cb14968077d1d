//! Pattern-based parsing of extracted document text
//!
//! Parsing is deliberately lenient: each recognized pattern is independent
//! and a missing or malformed section degrades to partial output. The
//! strict contract is applied afterwards by the validator, so malformed
//! documents reach an attributable validation error instead of a parse
//! crash.

mod form;
mod plan;

pub use form::extract_course_metadata;
pub use plan::extract_modulos;
