//! Server-side rendering: language selection, templates and the view
//! models they render.

pub mod lang;
pub mod templates;
pub mod view;

pub use lang::Lang;
pub use templates::{Page, Templates};
