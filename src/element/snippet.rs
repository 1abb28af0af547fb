use crate::element::{Element, StartTag};
use crate::error::Result;
use crate::ser::Encoder;

const DEFAULT_MAX_LINES: u32 = 2;

/// A short text shown in list views (`<Snippet>` or `<linkSnippet>`).
///
/// `maxLines` is only written when it differs from the default of 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetElement {
    tag: &'static str,
    max_lines: u32,
    value: String,
}

impl SnippetElement {
    pub fn new(tag: &'static str, value: impl Into<String>) -> Self {
        Self {
            tag,
            max_lines: DEFAULT_MAX_LINES,
            value: value.into(),
        }
    }

    pub fn max_lines(&self) -> u32 {
        self.max_lines
    }

    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }
}

impl Element for SnippetElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut tag = StartTag::new(self.tag);
        if self.max_lines != DEFAULT_MAX_LINES {
            tag = tag.with_attr("maxLines", self.max_lines.to_string());
        }
        encoder.leaf(&tag, &self.value)
    }
}

pub fn snippet(value: impl Into<String>) -> SnippetElement {
    SnippetElement::new("Snippet", value)
}

pub fn link_snippet(value: impl Into<String>) -> SnippetElement {
    SnippetElement::new("linkSnippet", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_default_max_lines_omitted() {
        assert_eq!(
            snippet("short").to_xml_string().unwrap(),
            "<Snippet>short</Snippet>"
        );
    }

    #[test]
    fn test_link_snippet_with_max_lines() {
        assert_eq!(
            link_snippet("text").with_max_lines(5).to_xml_string().unwrap(),
            r#"<linkSnippet maxLines="5">text</linkSnippet>"#
        );
    }
}
