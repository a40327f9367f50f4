// Function element handlers

use crate::common::error::{Error, Result};
use crate::common::xml::Element;
use crate::formula::latex::render_text;
use crate::formula::omml::context::Scope;
use crate::formula::omml::handlers::RunHandler;
use crate::formula::omml::translator::Translator;

/// Handler for function-apply elements (`m:func`), e.g. `sin x`
pub struct FunctionHandler;

impl FunctionHandler {
    pub fn handle<'s>(tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        let name = match elem.find("fName") {
            Some(fname) => FunctionNameHandler::name(fname, scope),
            None => String::new(),
        };
        let template = tr
            .tables()
            .function(&name)
            .ok_or_else(|| Error::UnsupportedFunction(name.clone()))?;

        let text = tr.translate_child(elem, "e", scope)?;
        Ok(render_text(template, &text))
    }
}

/// Handler for function name elements (`m:fName`)
pub struct FunctionNameHandler;

impl FunctionNameHandler {
    /// Text of the name's run, after symbol substitution.
    pub fn name(elem: &Element, scope: Scope<'_>) -> String {
        elem.find("r")
            .map(|run| RunHandler::handle(run, scope))
            .unwrap_or_default()
    }

    /// Outside of `m:func` a name is translated as its plain text.
    pub fn handle<'s>(_tr: &'s Translator<'_>, elem: &Element, scope: Scope<'s>) -> Result<String> {
        Ok(Self::name(elem, scope))
    }
}
