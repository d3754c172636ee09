//! Form domain layer
//!
//! Type-safe fields and the three submission forms they make up.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormButton, FormMessage, SubmissionForm};
