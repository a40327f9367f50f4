// Fraction element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::latex::render_template;
use crate::formula::omml::context::Scope;
use crate::formula::omml::properties::property_val;
use crate::formula::omml::translator::Translator;

/// Handler for fraction elements (`m:f`)
pub struct FractionHandler;

impl FractionHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let template = property_val(elem, &["fPr", "type"])
            .and_then(|kind| tables.fraction(kind))
            .unwrap_or(tables.fraction_default.as_str());

        let num = tr.translate_child(elem, "num", scope)?;
        let den = tr.translate_child(elem, "den", scope)?;
        Ok(render_template(template, &[("num", &num), ("den", &den)]))
    }
}
