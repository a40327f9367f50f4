// OMML property access
//
// Construct properties live in `*Pr` children holding small elements whose
// `m:val` attribute carries the value, e.g. `<m:accPr><m:chr m:val="~"/></m:accPr>`.

use crate::common::xml::Element;

/// Read `m:val` from the property element at `path` below `elem`.
///
/// `None` when the property element or its `val` attribute is missing;
/// `Some("")` when the value is present but explicitly empty.
#[inline]
pub fn property_val<'a>(elem: &'a Element, path: &[&str]) -> Option<&'a str> {
    elem.find_path(path).and_then(|prop| prop.attr("val"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_val_states() {
        let d = Element::omml("d").with_child(
            Element::omml("dPr")
                .with_child(Element::omml("begChr").with_val(""))
                .with_child(Element::omml("endChr")),
        );
        assert_eq!(property_val(&d, &["dPr", "begChr"]), Some(""));
        assert_eq!(property_val(&d, &["dPr", "endChr"]), None);
        assert_eq!(property_val(&d, &["dPr", "sepChr"]), None);
        assert_eq!(property_val(&d, &["fPr", "type"]), None);
    }
}
