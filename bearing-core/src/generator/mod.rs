//! Local, deterministic generation of bearing specification text.
//!
//! This is the only place the output templates live. The HTTP backend may
//! produce its own strings, but every fallback goes through here.

pub mod specification;

pub use specification::{
    C3_TOKEN, MISSING_NUMBER, SEGMENT_SEPARATOR, description_line, generate, specification_line,
    suffix_text,
};
