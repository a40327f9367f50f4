// Script element handlers

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::omml::context::Scope;
use crate::formula::omml::translator::Translator;

/// Handler for `m:sSub`, `m:sSup` and `m:sSubSup`.
///
/// The base and the `m:sub`/`m:sup` parts are children in document order,
/// so translating them in sequence yields `x_{i}^{2}`.
pub struct ScriptHandler;

impl ScriptHandler {
    #[inline]
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        tr.process_children(elem, scope, None)
    }
}

/// Handler for subscript parts (`m:sub`)
pub struct SubscriptElementHandler;

impl SubscriptElementHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let text = tr.process_children(elem, scope, tables.script_symbols.as_ref())?;
        Ok(tables.render_sub(&text))
    }
}

/// Handler for superscript parts (`m:sup`)
pub struct SuperscriptElementHandler;

impl SuperscriptElementHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let text = tr.process_children(elem, scope, tables.script_symbols.as_ref())?;
        Ok(tables.render_sup(&text))
    }
}
