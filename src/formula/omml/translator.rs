// OMML to LaTeX translator
//
// A recursive descent over the element tree. Every composite handler calls
// back into `process_children`, which dispatches each OMML child by tag and
// concatenates the resulting fragments in document order.

use super::context::Scope;
use super::handlers::*;
use super::lookup::Tag;
use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::config::{DEFAULT_TABLES, LatexTables, SymbolTable};
use log::{debug, trace};
use std::fmt;

/// Translates OMML element trees into LaTeX fragments.
///
/// A translator only borrows its lookup tables, so one instance can be
/// shared across threads and used for any number of expressions.
///
/// # Example
/// ```
/// use omml_latex::{Translator, common::xml};
///
/// let root = xml::parse(r#"<m:oMath>
///     <m:f>
///         <m:num><m:r><m:t>1</m:t></m:r></m:num>
///         <m:den><m:r><m:t>2</m:t></m:r></m:den>
///     </m:f>
/// </m:oMath>"#)?;
/// assert_eq!(Translator::new().translate(&root)?, "\\frac{1}{2}");
/// # Ok::<(), omml_latex::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    tables: &'t LatexTables,
}

impl Translator<'static> {
    /// Translator using the default lookup tables.
    pub fn new() -> Self {
        Self {
            tables: &DEFAULT_TABLES,
        }
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Translator<'t> {
    pub fn with_tables(tables: &'t LatexTables) -> Self {
        Self { tables }
    }

    #[inline]
    pub fn tables(&self) -> &'t LatexTables {
        self.tables
    }

    /// Scope a translation starts in: the base symbol table.
    #[inline]
    pub fn root_scope(&self) -> Scope<'t> {
        Scope::new(&self.tables.symbols)
    }

    /// Translate the children of an expression root such as `m:oMath`.
    ///
    /// Fails only when a construct cannot be expressed, in which case no
    /// partial output is returned.
    pub fn translate(&self, root: &Element) -> Result<String> {
        self.process_children(root, self.root_scope(), None)
    }

    /// Translate every OMML child of `elem` and concatenate the fragments.
    ///
    /// When `symbols` is given, text runs below `elem` use it instead of the
    /// table active in `scope`. Children outside the OMML namespace and tags
    /// without a handler produce no output.
    pub fn process_children<'s>(
        &'s self,
        elem: &Element,
        scope: Scope<'s>,
        symbols: Option<&'s SymbolTable>,
    ) -> Result<String> {
        let scope = match symbols {
            Some(table) => scope.with_symbols(table),
            None => scope,
        };

        let mut latex = String::new();
        for child in elem.children() {
            if !child.is_omml() {
                trace!("Skipping non-math element {}", child.name());
                continue;
            }
            let Some(tag) = Tag::from_local_name(child.local_name()) else {
                trace!("No handler for m:{}", child.local_name());
                continue;
            };
            latex.push_str(&self.dispatch(tag, child, scope)?);
        }
        Ok(latex)
    }

    /// Translate the first OMML child named `local`, or nothing if absent.
    pub(crate) fn translate_child<'s>(
        &'s self,
        elem: &Element,
        local: &str,
        scope: Scope<'s>,
    ) -> Result<String> {
        match elem.find(local) {
            Some(child) => self.process_children(child, scope, None),
            None => {
                debug!("m:{} has no m:{} child", elem.local_name(), local);
                Ok(String::new())
            },
        }
    }

    fn dispatch<'s>(&'s self, tag: Tag, elem: &Element, scope: Scope<'s>) -> Result<String> {
        match tag {
            Tag::Accent => AccentHandler::handle(self, elem, scope),
            Tag::Bar => BarHandler::handle(self, elem, scope),
            Tag::Delimiter => DelimiterHandler::handle(self, elem, scope),
            Tag::Subscript | Tag::Superscript | Tag::SubSup => {
                ScriptHandler::handle(self, elem, scope)
            },
            Tag::SubscriptElement => SubscriptElementHandler::handle(self, elem, scope),
            Tag::SuperscriptElement => SuperscriptElementHandler::handle(self, elem, scope),
            Tag::Fraction => FractionHandler::handle(self, elem, scope),
            Tag::Numerator | Tag::Denominator | Tag::Base => {
                ComponentHandler::handle(self, elem, scope)
            },
            Tag::Function => FunctionHandler::handle(self, elem, scope),
            Tag::FunctionName => FunctionNameHandler::handle(self, elem, scope),
            Tag::GroupChar => GroupCharHandler::handle(self, elem, scope),
            Tag::Run => Ok(RunHandler::handle(elem, scope)),
            Tag::Box | Tag::PreScript => Ok(UnsupportedHandler::handle(elem)),
        }
    }
}

/// The LaTeX translation of one math expression.
///
/// Translation happens on construction; the value then just holds the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathExpression {
    latex: String,
}

impl MathExpression {
    /// Translate `root` with the default tables.
    pub fn new(root: &Element) -> Result<Self> {
        Self::with_tables(root, &DEFAULT_TABLES)
    }

    pub fn with_tables(root: &Element, tables: &LatexTables) -> Result<Self> {
        let latex = Translator::with_tables(tables).translate(root)?;
        Ok(Self { latex })
    }

    #[inline]
    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn into_latex(self) -> String {
        self.latex
    }
}

impl fmt::Display for MathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.latex)
    }
}
