//! Builds an [`Element`] tree from XML text using `quick-xml`.

use super::element::{Element, OMML_NS, QName, WML_NS, XML_NS};
use crate::common::error::{Error, Result};
use quick_xml::NsReader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::name::ResolveResult;

/// Maximum element nesting accepted before the input is rejected.
pub const MAX_DEPTH: usize = 1000;

/// Prefixes usable without a declaration, so that fragments cut out of a
/// `word/document.xml` part still resolve.
const IMPLICIT_PREFIXES: [(&str, &str); 3] = [("m", OMML_NS), ("w", WML_NS), ("xml", XML_NS)];

/// Parse an XML document or fragment and return its document element.
///
/// # Example
/// ```
/// use omml_latex::common::xml;
///
/// let root = xml::parse(r#"<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>"#)?;
/// assert!(root.is_omml());
/// assert_eq!(root.local_name(), "oMath");
/// # Ok::<(), omml_latex::Error>(())
/// ```
pub fn parse(xml: &str) -> Result<Element> {
    if xml.trim().is_empty() {
        return Err(Error::InvalidStructure("Empty XML input".to_string()));
    }

    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::with_capacity(64);
    let mut root = None;

    loop {
        match reader.read_resolved_event() {
            Ok((ns, Event::Start(e))) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(Error::InvalidStructure(format!(
                        "Maximum XML depth {} exceeded",
                        MAX_DEPTH
                    )));
                }
                let namespace = namespace_uri(ns)?;
                let elem = open_element(&e, namespace, &reader)?;
                stack.push(elem);
            },
            Ok((ns, Event::Empty(e))) => {
                let namespace = namespace_uri(ns)?;
                let elem = open_element(&e, namespace, &reader)?;
                attach(elem, &mut stack, &mut root)?;
            },
            Ok((_, Event::End(_))) => {
                let elem = stack.pop().ok_or_else(|| {
                    Error::InvalidStructure("Closing tag without matching start".to_string())
                })?;
                attach(elem, &mut stack, &mut root)?;
            },
            Ok((_, Event::Text(e))) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(std::str::from_utf8(&e)?);
                }
            },
            Ok((_, Event::CData(e))) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(std::str::from_utf8(&e)?);
                }
            },
            Ok((_, Event::GeneralRef(e))) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&resolve_reference(&e)?);
                }
            },
            Ok((_, Event::Eof)) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            },
            _ => {}, // Declarations, comments, processing instructions, doctypes
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidStructure(format!(
            "Unclosed elements detected, final depth: {}",
            stack.len()
        )));
    }

    root.ok_or_else(|| Error::InvalidStructure("No root element found".to_string()))
}

fn attach(elem: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(elem),
        None if root.is_none() => *root = Some(elem),
        None => {
            return Err(Error::InvalidStructure(
                "Multiple root elements".to_string(),
            ));
        },
    }
    Ok(())
}

/// Build an element from a start tag whose name resolved to `namespace`.
///
/// `xmlns` declarations are consumed by the reader and not kept as
/// attributes.
fn open_element(
    e: &BytesStart,
    namespace: Option<String>,
    reader: &NsReader<&[u8]>,
) -> Result<Element> {
    let local = std::str::from_utf8(e.local_name().as_ref())?.to_string();
    let mut elem = Element::new(QName::new(namespace.as_deref(), local));

    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        // Unprefixed attributes never take the default namespace
        let (ns, local) = reader.resolve_attribute(attr.key);
        let namespace = namespace_uri(ns)?;
        let local = std::str::from_utf8(local.as_ref())?;
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        elem.set_attribute(QName::new(namespace.as_deref(), local), value);
    }

    Ok(elem)
}

/// Namespace URI of a resolved name. Undeclared prefixes fall back to
/// [`IMPLICIT_PREFIXES`].
fn namespace_uri(resolved: ResolveResult<'_>) -> Result<Option<String>> {
    match resolved {
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Bound(ns) => Ok(Some(std::str::from_utf8(ns.into_inner())?.to_string())),
        ResolveResult::Unknown(prefix) => {
            let prefix = std::str::from_utf8(&prefix)?;
            IMPLICIT_PREFIXES
                .iter()
                .find(|(known, _)| *known == prefix)
                .map(|(_, uri)| Some(uri.to_string()))
                .ok_or_else(|| Error::Xml(format!("Unbound namespace prefix: {}", prefix)))
        },
    }
}

fn resolve_reference(e: &BytesRef) -> Result<String> {
    if let Some(ch) = e.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = std::str::from_utf8(e)?;
    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| Error::Xml(format!("Unknown entity reference: &{};", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_implicit_math_prefix() {
        let root = parse(r#"<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>"#).unwrap();
        assert!(root.is_omml());
        let t = root.find_path(&["r", "t"]).unwrap();
        assert_eq!(t.text(), Some("x"));
    }

    #[test]
    fn test_parse_declared_prefix() {
        let xml = r#"<math:oMath xmlns:math="http://schemas.openxmlformats.org/officeDocument/2006/math">
            <math:acc><math:accPr><math:chr math:val="~"/></math:accPr></math:acc>
        </math:oMath>"#;
        let root = parse(xml).unwrap();
        assert!(root.is_omml());
        let chr = root.find_path(&["acc", "accPr", "chr"]).unwrap();
        assert_eq!(chr.attribute(&QName::omml("val")), Some("~"));
    }

    #[test]
    fn test_parse_default_namespace() {
        let xml = r#"<oMath xmlns="http://schemas.openxmlformats.org/officeDocument/2006/math"><r/></oMath>"#;
        let root = parse(xml).unwrap();
        assert!(root.is_omml());
        assert!(root.children()[0].is_omml());
    }

    #[test]
    fn test_parse_keeps_whitespace_and_entities() {
        let root = parse(r#"<m:t xml:space="preserve"> a &lt; b &#x3B1;</m:t>"#).unwrap();
        assert_eq!(root.text(), Some(" a < b \u{3b1}"));
        assert_eq!(
            root.attribute(&QName::new(Some(XML_NS), "space")),
            Some("preserve")
        );
    }

    #[test]
    fn test_parse_namespace_declarations() {
        let xml = r#"<oMath xmlns="http://schemas.openxmlformats.org/officeDocument/2006/math" xmlns:v="urn:vendor">
            <r xmlns=""/>
            <v:x v:a="1" b="2"/>
        </oMath>"#;
        let root = parse(xml).unwrap();
        assert!(root.is_omml());
        assert_eq!(root.attribute(&QName::new(None, "xmlns")), None);

        let r = &root.children()[0];
        assert_eq!(r.local_name(), "r");
        assert!(r.name().namespace.is_none());

        let x = &root.children()[1];
        assert!(x.name().in_namespace("urn:vendor"));
        assert_eq!(x.attribute(&QName::new(Some("urn:vendor"), "a")), Some("1"));
        assert_eq!(x.attribute(&QName::new(None, "b")), Some("2"));
    }

    #[test]
    fn test_parse_declaration_overrides_implicit_prefix() {
        let root = parse(r#"<m:oMath xmlns:m="urn:not-math"/>"#).unwrap();
        assert!(!root.is_omml());
        assert!(root.name().in_namespace("urn:not-math"));
    }

    #[test]
    fn test_parse_unbound_prefix() {
        let err = parse(r#"<v:shape/>"#).unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse("  "), Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_parse_unclosed() {
        assert!(parse(r#"<m:oMath><m:r>"#).is_err());
    }

    #[test]
    fn test_parse_depth_limit() {
        let xml = format!("{}{}", "<m:e>".repeat(MAX_DEPTH + 1), "</m:e>".repeat(MAX_DEPTH + 1));
        assert!(matches!(parse(&xml), Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_scope_ends_with_element() {
        let xml = r#"<w:body>
            <p:x xmlns:p="urn:a"/>
            <p:y/>
        </w:body>"#;
        assert!(parse(xml).is_err());
    }
}
