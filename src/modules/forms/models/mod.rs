mod draft;
mod payload;
pub mod schema;

pub use draft::{input_text, FormDraft};
pub use payload::{FormKind, SubmissionPayload, SubmitOutcome};
pub use schema::{FieldErrors, FieldRule, FormSchema};
