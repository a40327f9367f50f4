// Delimiter element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::config::LatexTables;
use crate::formula::omml::context::Scope;
use crate::formula::omml::properties::property_val;
use crate::formula::omml::translator::Translator;

/// Handler for delimiter (fenced) elements (`m:d`)
pub struct DelimiterHandler;

impl DelimiterHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let tables = tr.tables();
        let left = Self::fence(elem, "begChr", &tables.delimiter_open, tables);
        let right = Self::fence(elem, "endChr", &tables.delimiter_close, tables);

        // Several m:e children are separate arguments, e.g. (a|b)
        let separator = property_val(elem, &["dPr", "sepChr"])
            .map(|sep| tables.escape(sep))
            .unwrap_or_else(|| tables.delimiter_separator.clone());
        let mut text = String::new();
        for (i, e) in elem
            .children()
            .iter()
            .filter(|c| c.is_omml() && c.local_name() == "e")
            .enumerate()
        {
            if i > 0 {
                text.push_str(&separator);
            }
            text.push_str(&tr.process_children(e, scope, None)?);
        }

        Ok(tables.render_delimiter(&left, &text, &right))
    }

    /// Resolve one fence character: missing means the default, an explicit
    /// empty value means the invisible delimiter.
    fn fence(elem: &Element, property: &str, default: &str, tables: &LatexTables) -> String {
        let chr = match property_val(elem, &["dPr", property]) {
            None => default,
            Some("") => tables.delimiter_null.as_str(),
            Some(chr) => chr,
        };
        tables.escape(chr)
    }
}
