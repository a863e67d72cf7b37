//! Selected-file rendering, editing, and persistence.

pub mod editor;
pub mod renderer;

pub use editor::TextEditSession;
pub use renderer::FileRenderer;
