//! omml-latex - Translate Office Math Markup Language (OMML) to LaTeX
//!
//! Equations in modern Office documents (.docx, .pptx) are stored as OMML,
//! an XML dialect in the `http://schemas.openxmlformats.org/officeDocument/2006/math`
//! namespace. This crate turns each `m:oMath` expression into a bare LaTeX
//! fragment (no surrounding `$...$`).
//!
//! # Features
//!
//! - **Recursive translator**: fractions, sub/superscripts, delimiters,
//!   accents, bars, group characters and function application
//! - **Configurable tables**: accents, functions, symbols and templates can
//!   be overridden in code or loaded from YAML
//! - **Scoped symbol tables**: subscripts and superscripts can use their own
//!   character substitutions without affecting the rest of the expression
//! - **Namespace-aware XML**: elements outside the math namespace are ignored
//!
//! `m:box` and `m:sPre` are recognized but produce no output, and other
//! unknown constructs are skipped. An unknown function name fails the
//! whole expression with [`Error::UnsupportedFunction`].
//!
//! # Example - Translating a fragment
//!
//! ```
//! use omml_latex::omml_to_latex;
//!
//! # fn main() -> Result<(), omml_latex::Error> {
//! let latex = omml_to_latex(r#"<m:oMath>
//!     <m:f>
//!         <m:num><m:r><m:t>1</m:t></m:r></m:num>
//!         <m:den><m:r><m:t>2</m:t></m:r></m:den>
//!     </m:f>
//! </m:oMath>"#)?;
//! assert_eq!(latex, vec!["\\frac{1}{2}".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Working with a parsed tree
//!
//! ```
//! use omml_latex::{LatexTables, Translator, common::xml};
//!
//! # fn main() -> Result<(), omml_latex::Error> {
//! let root = xml::parse(r#"<m:oMath>
//!     <m:func>
//!         <m:fName><m:r><m:t>sgn</m:t></m:r></m:fName>
//!         <m:e><m:r><m:t>x</m:t></m:r></m:e>
//!     </m:func>
//! </m:oMath>"#)?;
//!
//! // sgn is not a known function by default
//! assert!(Translator::new().translate(&root).is_err());
//!
//! let tables = LatexTables::new().with_function("sgn", "\\operatorname{{sgn}}({text})");
//! let latex = Translator::with_tables(&tables).translate(&root)?;
//! assert_eq!(latex, "\\operatorname{sgn}(x)");
//! # Ok(())
//! # }
//! ```

/// Common types shared across modules
///
/// Error types and the namespace-aware XML element tree.
pub mod common;

/// Formula translation
///
/// The OMML translator, its lookup tables and LaTeX helpers.
pub mod formula;

// Re-export commonly used types for convenience
pub use common::{Element, Error, QName, Result};
pub use formula::latex::{escape_latex, render_template};
pub use formula::{
    LatexTables, MathExpression, Scope, SymbolTable, Tag, Translator, load, load_with_tables,
    math_roots, omml_to_latex, translate,
};
