//! The element tree.
//!
//! Every node implements [`Element`], a single "encode yourself" method.
//! Most nodes are one of three shapes:
//!
//! - [`SimpleElement`]: a tag with attributes and one text value
//! - [`CompoundElement`]: a tag with attributes and ordered children
//! - [`SharedElement`]: a compound element with an `id`, referenced
//!   elsewhere by its [`url`](SharedElement::url)
//!
//! The remaining kinds ([`coordinates`], [`root`], [`schema`], [`snippet`])
//! format their own content.

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::encode::Scalar;
use crate::error::Result;
use crate::ser::{self, Encoder};

pub mod coordinates;
pub mod root;
pub mod schema;
pub mod snippet;

/// A node that can encode itself as XML.
pub trait Element: fmt::Debug {
    /// Write this element, its content, and its end tag to `encoder`.
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()>;

    /// Whether this element is a `<kml>` document root.
    fn is_root(&self) -> bool {
        false
    }

    /// Write an XML declaration followed by this element.
    fn write<W: Write>(&self, writer: W) -> Result<()>
    where
        Self: Sized,
    {
        ser::write(writer, self)
    }

    /// Like [`write`](Element::write) but indented.
    fn write_indent<W: Write>(&self, writer: W, prefix: &str, indent: &str) -> Result<()>
    where
        Self: Sized,
    {
        ser::write_indent(writer, self, prefix, indent)
    }

    /// Render compactly, without the XML declaration.
    fn to_xml_string(&self) -> Result<String>
    where
        Self: Sized,
    {
        ser::to_xml_string(self)
    }

    fn boxed(self) -> Box<dyn Element>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }

    fn is_root(&self) -> bool {
        (**self).is_root()
    }
}

/// Build a `Vec<Box<dyn Element>>` from heterogeneous elements.
///
/// ```
/// use kmlkit::{elements, name, visibility};
///
/// let children = elements![name("a"), visibility(false)];
/// assert_eq!(children.len(), 2);
/// ```
#[macro_export]
macro_rules! elements {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::Element>>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($element) as ::std::boxed::Box<dyn $crate::Element>),+]
    };
}

/// An attribute name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: Cow<'static, str>,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A tag name with its attributes, kept in the order they were set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    name: Cow<'static, str>,
    attrs: Vec<Attr>,
}

impl StartTag {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::new(name, value));
        self
    }

    /// Set `name` to `value`, replacing an existing attribute in place or
    /// appending a new one.
    pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attr { name, value }),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|a| a.name != name);
    }
}

/// An element holding a single text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleElement {
    tag: StartTag,
    value: String,
}

impl SimpleElement {
    /// Create a leaf whose text is the KML encoding of `value`.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Scalar) -> Self {
        Self {
            tag: StartTag::new(name),
            value: value.encode().into_owned(),
        }
    }

    /// Create a leaf from an already-built start tag and text.
    pub fn with_tag(tag: StartTag, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    pub fn tag(&self) -> &StartTag {
        &self.tag
    }

    /// The unescaped text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.tag.set_attr(name, value);
        self
    }
}

impl Element for SimpleElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.leaf(&self.tag, &self.value)
    }
}

/// An element holding ordered children.
#[derive(Debug)]
pub struct CompoundElement {
    tag: StartTag,
    children: Vec<Box<dyn Element>>,
}

impl CompoundElement {
    pub fn new(name: impl Into<Cow<'static, str>>, children: Vec<Box<dyn Element>>) -> Self {
        Self::with_tag(StartTag::new(name), children)
    }

    pub fn with_tag(tag: StartTag, children: Vec<Box<dyn Element>>) -> Self {
        Self { tag, children }
    }

    pub fn tag(&self) -> &StartTag {
        &self.tag
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    /// Append `children` in order and return `self` for chaining.
    pub fn add(&mut self, children: impl IntoIterator<Item = Box<dyn Element>>) -> &mut Self {
        self.children.extend(children);
        self
    }

    /// Append one child and return `self` for chaining.
    pub fn push<E: Element + 'static>(&mut self, child: E) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Consuming form of [`push`](CompoundElement::push).
    pub fn with<E: Element + 'static>(mut self, child: E) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.tag.set_attr(name, value);
        self
    }
}

impl Element for CompoundElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.children(&self.tag, &self.children)
    }
}

/// A compound element carrying an `id` so it can be referenced by URL.
///
/// The `id` attribute is only written when the id is non-empty.
#[derive(Debug)]
pub struct SharedElement {
    inner: CompoundElement,
    id: String,
}

impl SharedElement {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        id: impl Into<String>,
        children: Vec<Box<dyn Element>>,
    ) -> Self {
        let mut element = Self {
            inner: CompoundElement::new(name, children),
            id: String::new(),
        };
        element.set_id(id);
        element
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `#id`, or an empty string when the element has no id.
    pub fn url(&self) -> String {
        if self.id.is_empty() {
            String::new()
        } else {
            format!("#{}", self.id)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        if self.id.is_empty() {
            self.inner.tag.remove_attr("id");
        } else {
            // The id always leads the attribute list.
            self.inner.tag.remove_attr("id");
            self.inner.tag.attrs.insert(0, Attr::new("id", self.id.clone()));
        }
    }

    pub fn with_attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.inner.tag.set_attr(name, value);
        self
    }

    /// Set the `name` attribute, or remove it when `name` is empty.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            self.inner.tag.remove_attr("name");
        } else {
            self.inner.tag.set_attr("name", name);
        }
        self
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        self.inner.children()
    }

    pub fn add(&mut self, children: impl IntoIterator<Item = Box<dyn Element>>) -> &mut Self {
        self.inner.add(children);
        self
    }

    pub fn push<E: Element + 'static>(&mut self, child: E) -> &mut Self {
        self.inner.push(child);
        self
    }

    pub fn with<E: Element + 'static>(mut self, child: E) -> Self {
        self.inner.push(child);
        self
    }
}

impl Element for SharedElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.inner.encode(encoder)
    }
}
