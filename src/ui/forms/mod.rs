//! Form rendering module
//!
//! - `field_renderer`: single field and message rendering
//! - `submission_form`: the registration, requirement and contact forms

mod field_renderer;
mod submission_form;

pub use submission_form::draw_submission_form;
