//! Read-only element tree produced by [`parse`](super::parse).
//!
//! Names are kept namespace-qualified so that OMML elements can be told apart
//! from WordprocessingML or vendor extension elements sharing a local name.

use std::fmt;

/// Office Math Markup Language namespace URI.
pub const OMML_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// WordprocessingML main namespace URI.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// The namespace bound to the reserved `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A namespace-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local: local.into(),
        }
    }

    /// Name in the OMML namespace.
    pub fn omml(local: impl Into<String>) -> Self {
        Self::new(Some(OMML_NS), local)
    }

    #[inline]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }

    #[inline]
    pub fn is_omml(&self) -> bool {
        self.in_namespace(OMML_NS)
    }
}

/// Clark notation, `{namespace}local`.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// An element node with its attributes, ordered children and text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QName,
    attributes: Vec<(QName, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Shorthand for an element in the OMML namespace.
    ///
    /// Together with the `with_*` builders this is handy for assembling
    /// trees in code without going through XML text.
    pub fn omml(local: &str) -> Self {
        Self::new(QName::omml(local))
    }

    pub fn with_attribute(mut self, name: QName, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Add an OMML-qualified `m:val` attribute.
    pub fn with_val(self, value: impl Into<String>) -> Self {
        self.with_attribute(QName::omml("val"), value)
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    #[inline]
    pub fn is_omml(&self) -> bool {
        self.name.is_omml()
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn attribute(&self, name: &QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Read an OMML attribute such as `m:val`.
    ///
    /// Falls back to an unqualified attribute of the same local name, which
    /// some producers emit inside math properties.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attribute(&QName::omml(local))
            .or_else(|| self.attribute(&QName::new(None, local)))
    }

    /// Text content, if any text node was seen directly under this element.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct OMML child with the given local name.
    pub fn find(&self, local: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.is_omml() && c.local_name() == local)
    }

    /// Follow a path of OMML local names, e.g. `["accPr", "chr"]`.
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |elem, local| elem.find(local))
    }

    /// Pre-order iterator over all descendants, not including `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    pub(crate) fn set_attribute(&mut self, name: QName, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Element>>,
}

impl Descendants<'_> {
    /// Do not descend into the element most recently returned by `next`.
    pub fn skip_subtree(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(elem) => {
                    self.stack.push(elem.children.iter());
                    return Some(elem);
                },
                None => {
                    self.stack.pop();
                },
            }
        }
    }
}
