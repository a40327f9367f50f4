// Formula Module - OMML to LaTeX conversion
//
// This module converts Office Math Markup Language (OMML), the XML format
// used for equations in modern Office files, into LaTeX fragments.
//
// - **config**: lookup tables (accents, functions, symbols, templates)
// - **latex**: escaping, template rendering and the default table data
// - **omml**: the recursive translator and its per-construct handlers
//
// # Example
//
// ```ignore
// use omml_latex::formula::omml_to_latex;
//
// let latex = omml_to_latex("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
// assert_eq!(latex, vec!["x"]);
// ```

/// Lookup table configuration
///
/// Default tables are built from static data; every table can be replaced
/// in code or loaded from YAML.
pub mod config;
/// LaTeX output helpers
///
/// Escaping of reserved characters, placeholder templates, and the
/// default lookup data.
pub mod latex;
/// OMML translator
///
/// Walks an OMML element tree and renders each construct to LaTeX.
mod omml;

// Re-export public API
pub use config::{LatexTables, SymbolTable};
pub use omml::{MathExpression, Scope, Tag, Translator};

use crate::common::error::Result;
use crate::common::xml::{self, Element};
use log::{debug, warn};

/// Translate one expression root with the default tables.
pub fn translate(root: &Element) -> Result<String> {
    Translator::new().translate(root)
}

/// All outermost `m:oMath` elements in `root`, in document order.
///
/// `root` itself is returned when it is an `m:oMath`.
pub fn math_roots(root: &Element) -> Vec<&Element> {
    let is_math = |elem: &Element| elem.is_omml() && elem.local_name() == "oMath";
    if is_math(root) {
        return vec![root];
    }

    let mut found = Vec::new();
    let mut walk = root.descendants();
    while let Some(elem) = walk.next() {
        if is_math(elem) {
            found.push(elem);
            walk.skip_subtree();
        }
    }
    found
}

/// Parse an XML document and translate every math expression in it.
///
/// Parsing errors fail the whole call. Each expression then succeeds or
/// fails on its own, so the caller can decide whether to skip, report or
/// abort on an unsupported construct.
///
/// # Example
/// ```
/// let results = omml_latex::load(r#"<w:p>
///     <m:oMath><m:r><m:t>a</m:t></m:r></m:oMath>
///     <m:oMath><m:r><m:t>b</m:t></m:r></m:oMath>
/// </w:p>"#)?;
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].as_deref(), Ok("b"));
/// # Ok::<(), omml_latex::Error>(())
/// ```
pub fn load(xml: &str) -> Result<Vec<Result<String>>> {
    load_with_tables(xml, &config::DEFAULT_TABLES)
}

/// [`load`] with custom lookup tables.
pub fn load_with_tables(xml: &str, tables: &LatexTables) -> Result<Vec<Result<String>>> {
    let document = xml::parse(xml)?;
    let translator = Translator::with_tables(tables);

    let results: Vec<_> = math_roots(&document)
        .into_iter()
        .enumerate()
        .map(|(index, root)| {
            let result = translator.translate(root);
            if let Err(e) = &result {
                warn!("Math expression #{} could not be translated: {}", index + 1, e);
            }
            result
        })
        .collect();

    debug!("Translated {} math expression(s)", results.len());
    Ok(results)
}

/// Convert OMML to LaTeX, one string per math expression.
///
/// Unlike [`load`], the first failing expression fails the whole call.
///
/// # Example
/// ```
/// let latex = omml_latex::omml_to_latex("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
/// assert_eq!(latex, vec!["x".to_string()]);
/// # Ok::<(), omml_latex::Error>(())
/// ```
pub fn omml_to_latex(omml: &str) -> Result<Vec<String>> {
    load(omml)?.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
            xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">
  <w:body>
    <w:p>
      <w:r><w:t>Area: </w:t></w:r>
      <m:oMath>
        <m:r><m:t>A=</m:t></m:r>
        <m:r><m:t>&#x3C0;</m:t></m:r>
        <m:sSup>
          <m:e><m:r><m:t>r</m:t></m:r></m:e>
          <m:sup><m:r><m:t>2</m:t></m:r></m:sup>
        </m:sSup>
      </m:oMath>
    </w:p>
    <w:p>
      <m:oMathPara>
        <m:oMath>
          <m:func>
            <m:fName><m:r><m:t>erf</m:t></m:r></m:fName>
            <m:e><m:r><m:t>x</m:t></m:r></m:e>
          </m:func>
        </m:oMath>
        <m:oMath>
          <m:f>
            <m:num><m:r><m:t>a</m:t></m:r></m:num>
            <m:den><m:r><m:t>b</m:t></m:r></m:den>
          </m:f>
        </m:oMath>
      </m:oMathPara>
    </w:p>
  </w:body>
</w:document>"#;

    fn run(text: &str) -> Element {
        Element::omml("r").with_child(Element::omml("t").with_text(text))
    }

    #[test]
    fn test_load_document() {
        let results = load(DOCUMENT).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref(), Ok("A=\\pi r^{2}"));
        assert_eq!(results[1], Err(Error::UnsupportedFunction("erf".to_string())));
        assert_eq!(results[2].as_deref(), Ok("\\frac{a}{b}"));
    }

    #[test]
    fn test_load_with_tables() {
        let tables = LatexTables::new().with_function("erf", "\\operatorname{{erf}}({text})");
        let results = load_with_tables(DOCUMENT, &tables).unwrap();
        assert_eq!(results[1].as_deref(), Ok("\\operatorname{erf}(x)"));
    }

    #[test]
    fn test_omml_to_latex_fails_on_first_error() {
        assert_eq!(
            omml_to_latex(DOCUMENT),
            Err(Error::UnsupportedFunction("erf".to_string()))
        );
    }

    #[test]
    fn test_omml_to_latex() {
        let latex = omml_to_latex(r#"<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>"#).unwrap();
        assert_eq!(latex, vec!["x".to_string()]);
    }

    #[test]
    fn test_load_without_math() {
        assert!(load(r#"<w:p><w:r><w:t>text</w:t></w:r></w:p>"#).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed() {
        assert!(load(r#"<m:oMath><m:r></m:oMath>"#).is_err());
        assert!(load("").is_err());
    }

    #[test]
    fn test_math_roots_outermost_only() {
        let root = Element::omml("oMath").with_child(Element::omml("oMath"));
        assert_eq!(math_roots(&root).len(), 1);

        let para = Element::omml("oMathPara")
            .with_child(Element::omml("oMath").with_child(Element::omml("oMath")))
            .with_child(Element::omml("r"))
            .with_child(Element::omml("oMath").with_child(run("b")));
        let roots = math_roots(&para);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].children()[0].local_name(), "r");
    }

    #[test]
    fn test_translate() {
        let root = xml::parse(r#"<m:oMath><m:bar><m:e><m:r><m:t>z</m:t></m:r></m:e></m:bar></m:oMath>"#)
            .unwrap();
        assert_eq!(translate(&root).unwrap(), "\\overline{z}");
    }
}
