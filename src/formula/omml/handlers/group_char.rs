// Group character element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::latex::render_text;
use crate::formula::omml::context::Scope;
use crate::formula::omml::properties::property_val;
use crate::formula::omml::translator::Translator;

/// Handler for group character elements (`m:groupChr`), e.g. braces
pub struct GroupCharHandler;

impl GroupCharHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let text = tr.translate_child(elem, "e", scope)?;

        // No marker, or an explicitly empty one, still yields the operand
        let chr = match property_val(elem, &["groupChrPr", "chr"]) {
            None | Some("") => return Ok(text),
            Some(chr) => chr,
        };
        if let Some(template) = tables.accent(chr) {
            return Ok(render_text(template, &text));
        }

        // Unknown character: place it above or below the base
        let command = match property_val(elem, &["groupChrPr", "pos"]) {
            Some("top") => "overset",
            _ => "underset",
        };
        Ok(format!("\\{}{{{}}}{{{}}}", command, tables.escape(chr), text))
    }
}
