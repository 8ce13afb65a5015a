// Résumé text parsing: normalize → segment → extract fields.
// Pure functions over in-memory text; no I/O.

pub mod fields;
pub mod handlers;
pub mod normalize;
pub mod resume;
pub mod sections;

pub use resume::{parse_resume, ParsedResume};
