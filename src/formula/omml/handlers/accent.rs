// Accent element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::latex::render_text;
use crate::formula::omml::context::Scope;
use crate::formula::omml::properties::property_val;
use crate::formula::omml::translator::Translator;

/// Handler for accent elements (`m:acc`)
pub struct AccentHandler;

impl AccentHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let text = tr.translate_child(elem, "e", scope)?;

        match property_val(elem, &["accPr", "chr"]) {
            None => Ok(render_text(&tables.accent_default, &text)),
            // An explicitly empty accent keeps the operand instead of erasing it
            Some("") => Ok(text),
            Some(chr) => match tables.accent(chr) {
                Some(template) => Ok(render_text(template, &text)),
                // Unknown accent: stack the character over the base
                None => Ok(format!("\\overset{{{}}}{{{}}}", tables.escape(chr), text)),
            },
        }
    }
}
