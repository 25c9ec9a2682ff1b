//! Contact-form submission pipeline.
//!
//! Every submission flows through:
//! 1. `form::validate()` — field rules on the raw JSON body
//! 2. `format::*` — operator notification + submitter confirmation bodies
//! 3. `ContactPipeline::submit()` — the two sequential sends
//!
//! Submissions are transient: validated, mailed, discarded. Nothing is
//! persisted.

pub mod form;
pub mod format;
pub mod pipeline;
