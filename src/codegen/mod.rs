pub mod emitter;
pub mod entry;
pub mod escape;

pub use emitter::{render_document, RenderedDocument, TemplateEmitter};
pub use entry::{LocalizationEntry, MIN_ROW_FIELDS};
pub use escape::escape_literal;
