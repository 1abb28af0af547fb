//! KMZ archive packaging.
//!
//! A KMZ file is a ZIP archive holding a KML document plus any files it
//! references. Entries are written in name order with a fixed timestamp,
//! so identical inputs produce identical archives.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read, Seek, Write};

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::element::Element;
use crate::element::root::{GxKmlElement, KmlElement};
use crate::error::{Error, Result};
use crate::ser;

/// Conventional name of the main document inside an archive.
pub const DOC_KML: &str = "doc.kml";

/// Content of one archive entry.
pub enum Payload {
    /// Raw bytes, written verbatim.
    Bytes(Vec<u8>),
    /// Text, written as UTF-8.
    Text(String),
    /// A `<kml>` document, written with its XML declaration.
    Kml(KmlElement),
    /// A `<kml>` document with the `gx` namespace.
    GxKml(GxKmlElement),
    /// Any element. One that is not already a `<kml>` root is wrapped in
    /// one when written.
    Element(Box<dyn Element>),
    /// A stream copied until end of input.
    Reader(Box<dyn Read>),
}

impl Payload {
    /// Wrap any element.
    pub fn element<E: Element + 'static>(element: E) -> Self {
        Payload::Element(Box::new(element))
    }

    /// Wrap a stream.
    pub fn reader<R: Read + 'static>(reader: R) -> Self {
        Payload::Reader(Box::new(reader))
    }

    /// Convert an arbitrary value by dispatching on its concrete type.
    ///
    /// Accepts byte vectors and slices, strings, `<kml>` roots and boxed
    /// elements. Anything else is [`Error::UnsupportedType`].
    pub fn from_any<T: Any>(value: T) -> Result<Payload> {
        let any: Box<dyn Any> = Box::new(value);
        let any = match any.downcast::<Payload>() {
            Ok(p) => return Ok(*p),
            Err(other) => other,
        };
        let any = match any.downcast::<Vec<u8>>() {
            Ok(b) => return Ok(Payload::Bytes(*b)),
            Err(other) => other,
        };
        let any = match any.downcast::<&'static [u8]>() {
            Ok(b) => return Ok(Payload::Bytes(b.to_vec())),
            Err(other) => other,
        };
        let any = match any.downcast::<String>() {
            Ok(s) => return Ok(Payload::Text(*s)),
            Err(other) => other,
        };
        let any = match any.downcast::<&'static str>() {
            Ok(s) => return Ok(Payload::Text(s.to_string())),
            Err(other) => other,
        };
        let any = match any.downcast::<KmlElement>() {
            Ok(e) => return Ok(Payload::Kml(*e)),
            Err(other) => other,
        };
        let any = match any.downcast::<GxKmlElement>() {
            Ok(e) => return Ok(Payload::GxKml(*e)),
            Err(other) => other,
        };
        match any.downcast::<Box<dyn Element>>() {
            Ok(e) => Ok(Payload::Element(*e)),
            Err(_) => Err(Error::unsupported::<T>()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Payload::Bytes(_) => "bytes",
            Payload::Text(_) => "text",
            Payload::Kml(_) => "kml",
            Payload::GxKml(_) => "gx:kml",
            Payload::Element(_) => "element",
            Payload::Reader(_) => "reader",
        }
    }

    fn write_to<W: Write>(self, out: &mut W) -> Result<()> {
        match self {
            Payload::Bytes(bytes) => out.write_all(&bytes)?,
            Payload::Text(text) => out.write_all(text.as_bytes())?,
            Payload::Kml(kml) => kml.write(out)?,
            Payload::GxKml(kml) => kml.write(out)?,
            Payload::Element(element) if element.is_root() => ser::write(out, &element)?,
            Payload::Element(element) => KmlElement::new(element).write(out)?,
            Payload::Reader(mut reader) => {
                io::copy(&mut reader, out)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Payload::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Payload::Kml(k) => f.debug_tuple("Kml").field(k).finish(),
            Payload::GxKml(k) => f.debug_tuple("GxKml").field(k).finish(),
            Payload::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Payload::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Bytes(value)
    }
}

impl From<&[u8]> for Payload {
    fn from(value: &[u8]) -> Self {
        Payload::Bytes(value.to_vec())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<KmlElement> for Payload {
    fn from(value: KmlElement) -> Self {
        Payload::Kml(value)
    }
}

impl From<GxKmlElement> for Payload {
    fn from(value: GxKmlElement) -> Self {
        Payload::GxKml(value)
    }
}

impl From<Box<dyn Element>> for Payload {
    fn from(value: Box<dyn Element>) -> Self {
        Payload::Element(value)
    }
}

/// How entries are stored in the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

/// Configuration for KMZ output.
#[derive(Debug, Clone, Default)]
pub struct KmzConfig {
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<u32>,
    pub compression: Compression,
}

/// Packages named payloads into a KMZ archive.
///
/// ```
/// use kmlkit::{KmzWriter, Payload, elements, kml, name, placemark};
/// use std::io::Cursor;
///
/// let mut out = Cursor::new(Vec::new());
/// KmzWriter::new().write(&mut out, [
///     ("doc.kml", Payload::from(kml(placemark(elements![name("p")])))),
///     ("notes.txt", Payload::from("hello")),
/// ])?;
/// # Ok::<(), kmlkit::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct KmzWriter {
    config: KmzConfig,
}

impl KmzWriter {
    /// Create a writer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: KmzConfig::default(),
        }
    }

    pub fn with_config(mut self, config: KmzConfig) -> Self {
        self.config = config;
        self
    }

    fn options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default().last_modified_time(DateTime::default());
        match self.config.compression {
            Compression::Stored => options.compression_method(CompressionMethod::Stored),
            Compression::Deflated => {
                let level = self.config.compression_level.unwrap_or(6);
                options
                    .compression_method(CompressionMethod::Deflated)
                    .compression_level(Some(level as i64))
            }
        }
    }

    /// Write `files` to `writer` as a ZIP archive, in name order.
    ///
    /// A name given twice keeps the last payload.
    pub fn write<W, K, I>(&self, writer: W, files: I) -> Result<()>
    where
        W: Write + Seek,
        K: Into<String>,
        I: IntoIterator<Item = (K, Payload)>,
    {
        self.write_entries(ZipWriter::new(writer), files)?;
        Ok(())
    }

    /// Like [`write`](KmzWriter::write), for sinks that cannot seek such as
    /// stdout or a pipe.
    ///
    /// Sizes and checksums follow each entry's data in a data descriptor.
    pub fn write_stream<W, K, I>(&self, writer: W, files: I) -> Result<()>
    where
        W: Write,
        K: Into<String>,
        I: IntoIterator<Item = (K, Payload)>,
    {
        self.write_entries(ZipWriter::new_stream(writer), files)?
            .flush()?;
        Ok(())
    }

    fn write_entries<W, K, I>(&self, mut zip: ZipWriter<W>, files: I) -> Result<W>
    where
        W: Write + Seek,
        K: Into<String>,
        I: IntoIterator<Item = (K, Payload)>,
    {
        let files: BTreeMap<String, Payload> =
            files.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let options = self.options();

        for (name, payload) in files {
            debug!("adding {name} ({})", payload.kind());
            zip.start_file(name.as_str(), options)?;
            payload.write_to(&mut zip)?;
        }
        Ok(zip.finish()?)
    }
}

/// Write `files` as a KMZ archive with the default configuration.
///
/// `writer` must be seekable; see [`KmzWriter::write_stream`] otherwise.
pub fn write_kmz<W, K, I>(writer: W, files: I) -> Result<()>
where
    W: Write + Seek,
    K: Into<String>,
    I: IntoIterator<Item = (K, Payload)>,
{
    KmzWriter::new().write(writer, files)
}
