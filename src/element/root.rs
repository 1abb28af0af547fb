//! Document roots.
//!
//! A KML document has exactly one `<kml>` element at the top, carrying the
//! KML namespace and, for documents using Google Earth extensions, the `gx`
//! namespace as well. A document uses one root kind or the other.

use crate::element::{Element, StartTag};
use crate::error::Result;
use crate::ser::Encoder;

/// The KML 2.2 namespace.
pub const NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// The Google Earth extension namespace.
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// A `<kml>` root wrapping the document's top-level element.
#[derive(Debug)]
pub struct KmlElement {
    child: Box<dyn Element>,
}

impl KmlElement {
    pub fn new(child: Box<dyn Element>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn Element {
        self.child.as_ref()
    }
}

impl Element for KmlElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let tag = StartTag::new("kml").with_attr("xmlns", NAMESPACE);
        encode_root(encoder, &tag, self.child.as_ref())
    }

    fn is_root(&self) -> bool {
        true
    }
}

/// A `<kml>` root that also declares the `gx` namespace.
#[derive(Debug)]
pub struct GxKmlElement {
    child: Box<dyn Element>,
}

impl GxKmlElement {
    pub fn new(child: Box<dyn Element>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn Element {
        self.child.as_ref()
    }
}

impl Element for GxKmlElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let tag = StartTag::new("kml")
            .with_attr("xmlns", NAMESPACE)
            .with_attr("xmlns:gx", GX_NAMESPACE);
        encode_root(encoder, &tag, self.child.as_ref())
    }

    fn is_root(&self) -> bool {
        true
    }
}

fn encode_root(encoder: &mut Encoder<'_>, tag: &StartTag, child: &dyn Element) -> Result<()> {
    encoder.start(tag)?;
    child.encode(encoder)?;
    encoder.end(tag.name())
}

/// A `<kml>` document root around `child`.
pub fn kml<E: Element + 'static>(child: E) -> KmlElement {
    KmlElement::new(Box::new(child))
}

/// A `<kml>` document root with the `gx` namespace around `child`.
pub fn gx_kml<E: Element + 'static>(child: E) -> GxKmlElement {
    GxKmlElement::new(Box::new(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::CompoundElement;

    #[test]
    fn test_write_kml() {
        let mut out = Vec::new();
        kml(CompoundElement::new("Document", Vec::new()))
            .write(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <kml xmlns=\"http://www.opengis.net/kml/2.2\"><Document></Document></kml>"
        );
    }

    #[test]
    fn test_gx_kml_declares_both_namespaces() {
        let xml = gx_kml(CompoundElement::new("Document", Vec::new()))
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            "<kml xmlns=\"http://www.opengis.net/kml/2.2\" \
             xmlns:gx=\"http://www.google.com/kml/ext/2.2\"><Document></Document></kml>"
        );
    }

    #[test]
    fn test_is_root() {
        let doc = || CompoundElement::new("Document", Vec::new());
        assert!(kml(doc()).is_root());
        assert!(gx_kml(doc()).is_root());
        assert!(!doc().is_root());
        assert!(kml(doc()).boxed().is_root());
    }
}
