// OMML (Office Math Markup Language) to LaTeX translation
//
// OMML is used in modern Office documents (.docx, .pptx, etc.) to represent
// mathematical formulas. The translator walks an already parsed element
// tree and renders each construct through the templates in `LatexTables`.
//
// Supported constructs: accents, bars, delimiters, sub/superscripts,
// fractions, function application and group characters. `m:box` and
// `m:sPre` are recognized but produce no output; any other tag is skipped.
//
// Reference: https://devblogs.microsoft.com/math-in-office/officemath/

mod context;
mod handlers;
mod lookup;
mod properties;
mod translator;

/// Re-export public API
pub use context::Scope;
pub use lookup::Tag;
pub use translator::{MathExpression, Translator};
