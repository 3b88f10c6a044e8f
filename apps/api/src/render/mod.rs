// Presentation: HTML page for the form and the generated merit statement.
// Model output is Markdown; it is converted here and never injected raw.

pub mod markdown;
pub mod page;

pub use page::render_page;
