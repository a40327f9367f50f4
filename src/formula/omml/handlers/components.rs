// Component element handler

use crate::common::error::Result;
use crate::common::xml::Element;
use crate::formula::omml::context::Scope;
use crate::formula::omml::translator::Translator;

/// Handler for containers without formatting of their own: `m:e`, `m:num`
/// and `m:den`. Their children are translated and concatenated as-is.
pub struct ComponentHandler;

impl ComponentHandler {
    #[inline]
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        tr.process_children(elem, scope, None)
    }
}
