// Bar element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::latex::render_text;
use crate::formula::omml::context::Scope;
use crate::formula::omml::properties::property_val;
use crate::formula::omml::translator::Translator;
use log::debug;

/// Handler for bar elements (`m:bar`)
pub struct BarHandler;

impl BarHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let template = match property_val(elem, &["barPr", "pos"]) {
            Some(pos) => tables.position(pos).unwrap_or_else(|| {
                debug!("Unknown bar position {:?}, using default", pos);
                tables.position_default.as_str()
            }),
            None => tables.position_default.as_str(),
        };
        let text = tr.translate_child(elem, "e", scope)?;
        Ok(render_text(template, &text))
    }
}
