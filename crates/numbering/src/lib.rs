//! Document-number generation.
//!
//! Human-readable `<PREFIX>-<5 digits>` identifiers, unique within each
//! transaction kind's namespace at the moment of creation. Random draws
//! with retry instead of a sequential counter: no shared-counter
//! coordination, at the cost of a vanishing collision probability handled
//! by retrying.

pub mod document_number;

pub use document_number::{
    MAX_DOCUMENT_NUMBER, MAX_RANDOM_ATTEMPTS, MIN_DOCUMENT_NUMBER, generate,
    next_document_number, taken_numbers,
};
