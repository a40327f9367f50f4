// Handler for recognized constructs without a LaTeX rendering

use crate::common::xml::Element;
use log::debug;

/// `m:box` and `m:sPre` translate to nothing.
pub struct UnsupportedHandler;

impl UnsupportedHandler {
    pub fn handle(elem: &Element) -> String {
        debug!("m:{} is not supported, omitting it", elem.local_name());
        String::new()
    }
}
