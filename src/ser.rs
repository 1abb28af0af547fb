//! XML serialization of element trees.
//!
//! Elements write themselves through an [`Encoder`], which wraps a
//! `quick_xml::Writer` and adds the indentation rules used for KML output:
//! start tags go on a new line, leaf text stays on the line of its start
//! tag, and an element with no children closes on the same line it opened.
//!
//! ```
//! use kmlkit::{coordinates, elements, kml, name, placemark, point, Coordinate};
//!
//! let doc = kml(placemark(elements![
//!     name("Simple placemark"),
//!     point(elements![coordinates(vec![Coordinate::new(-122.0822035425683, 37.42228990140251)])]),
//! ]));
//! let mut out = Vec::new();
//! kmlkit::write_indent(&mut out, &doc, "", "  ")?;
//! # Ok::<(), kmlkit::Error>(())
//! ```

use std::io::Write;

use log::trace;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::element::{Element, StartTag};
use crate::error::Result;

/// Indentation settings for [`write_indent`].
///
/// Each line starts with `prefix` followed by `indent` repeated once per
/// nesting level. Both empty means compact output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent {
    pub prefix: String,
    pub indent: String,
}

impl Indent {
    pub fn new(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            indent: indent.into(),
        }
    }

    /// Indent with `n` spaces per level and no prefix.
    pub fn spaces(n: usize) -> Self {
        Self::new("", " ".repeat(n))
    }

    fn is_compact(&self) -> bool {
        self.prefix.is_empty() && self.indent.is_empty()
    }
}

/// Token sink that elements encode themselves into.
pub struct Encoder<'w> {
    writer: Writer<&'w mut dyn Write>,
    indent: &'w Indent,
    depth: usize,
    /// Set right after a start tag; the matching end tag then needs no
    /// line break.
    indented_in: bool,
    put_newline: bool,
}

impl<'w> Encoder<'w> {
    pub fn new(inner: &'w mut dyn Write, indent: &'w Indent) -> Self {
        Self {
            writer: Writer::new(inner),
            indent,
            depth: 0,
            indented_in: false,
            put_newline: false,
        }
    }

    /// Write the `<?xml ...?>` declaration followed by a newline.
    pub fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Write a start tag with its attributes in insertion order.
    pub fn start(&mut self, tag: &StartTag) -> Result<()> {
        self.write_indent(Depth::In)?;
        let mut start = BytesStart::new(tag.name());
        for attr in tag.attrs() {
            start.push_attribute((attr.name.as_ref(), attr.value.as_str()));
        }
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    /// Write an end tag. Empty elements are always closed explicitly.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.write_indent(Depth::Out)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write character data, escaping markup characters.
    pub fn text(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Ok(())
    }

    /// Write `<tag>text</tag>`.
    pub fn leaf(&mut self, tag: &StartTag, text: &str) -> Result<()> {
        self.start(tag)?;
        self.text(text)?;
        self.end(tag.name())
    }

    /// Write `tag` wrapping each child in order.
    pub fn children(&mut self, tag: &StartTag, children: &[Box<dyn Element>]) -> Result<()> {
        self.start(tag)?;
        for child in children {
            child.encode(self)?;
        }
        self.end(tag.name())
    }

    fn write_indent(&mut self, delta: Depth) -> Result<()> {
        if self.indent.is_compact() {
            return Ok(());
        }
        if delta == Depth::Out {
            self.depth = self.depth.saturating_sub(1);
            if self.indented_in {
                self.indented_in = false;
                return Ok(());
            }
        }
        self.indented_in = false;
        let out = self.writer.get_mut();
        if self.put_newline {
            out.write_all(b"\n")?;
        } else {
            self.put_newline = true;
        }
        out.write_all(self.indent.prefix.as_bytes())?;
        for _ in 0..self.depth {
            out.write_all(self.indent.indent.as_bytes())?;
        }
        if delta == Depth::In {
            self.depth += 1;
            self.indented_in = true;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    In,
    Out,
}

/// Write the XML declaration and `element` without extra whitespace.
pub fn write<W, E>(writer: W, element: &E) -> Result<()>
where
    W: Write,
    E: Element + ?Sized,
{
    write_with(writer, element, &Indent::default())
}

/// Write the XML declaration and `element`, indenting nested elements.
pub fn write_indent<W, E>(writer: W, element: &E, prefix: &str, indent: &str) -> Result<()>
where
    W: Write,
    E: Element + ?Sized,
{
    write_with(writer, element, &Indent::new(prefix, indent))
}

/// Write the XML declaration and `element` using `indent`.
pub fn write_with<W, E>(mut writer: W, element: &E, indent: &Indent) -> Result<()>
where
    W: Write,
    E: Element + ?Sized,
{
    trace!("writing document (compact: {})", indent.is_compact());
    let mut encoder = Encoder::new(&mut writer, indent);
    encoder.declaration()?;
    element.encode(&mut encoder)?;
    writer.flush()?;
    Ok(())
}

/// Render `element` compactly, without the XML declaration.
pub fn to_xml_string<E>(element: &E) -> Result<String>
where
    E: Element + ?Sized,
{
    let mut buf = Vec::new();
    let indent = Indent::default();
    let mut encoder = Encoder::new(&mut buf, &indent);
    element.encode(&mut encoder)?;
    Ok(String::from_utf8(buf)?)
}
