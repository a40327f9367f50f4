// Run element handler

use crate::common::xml::Element;
use crate::formula::omml::context::Scope;

/// Handler for text runs (`m:r`), the leaves of the tree
pub struct RunHandler;

impl RunHandler {
    /// Map the run's `m:t` text through the active symbol table.
    pub fn handle(elem: &Element, scope: Scope<'_>) -> String {
        let symbols = scope.symbols();
        elem.children()
            .iter()
            .filter(|c| c.is_omml() && c.local_name() == "t")
            .filter_map(Element::text)
            .map(|text| symbols.substitute(text))
            .collect()
    }
}
