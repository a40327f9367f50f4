// LaTeX output support
//
// Escaping, template rendering and the default lookup tables used when
// building LaTeX from OMML.

pub mod symbols;
pub mod templates;
pub mod utils;

pub use templates::{render_template, render_text};
pub use utils::{escape_latex, escape_latex_with};
