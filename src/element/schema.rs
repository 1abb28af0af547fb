//! Extended data: schemas, typed fields and their values.

use crate::element::{CompoundElement, Element, SharedElement, SimpleElement, StartTag};
use crate::encode::{Value, format_float, format_int};
use crate::error::Result;
use crate::ser::Encoder;

/// A field declaration with required `name` and `type` attributes
/// (`<SimpleField>` or `<gx:SimpleArrayField>`).
///
/// Both attributes are always written, even when empty.
#[derive(Debug)]
pub struct SchemaFieldElement {
    tag: &'static str,
    name: String,
    field_type: String,
    children: Vec<Box<dyn Element>>,
}

impl SchemaFieldElement {
    pub fn new(
        tag: &'static str,
        name: impl Into<String>,
        field_type: impl Into<String>,
        children: Vec<Box<dyn Element>>,
    ) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type: field_type.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn add(&mut self, children: impl IntoIterator<Item = Box<dyn Element>>) -> &mut Self {
        self.children.extend(children);
        self
    }

    pub fn with<E: Element + 'static>(mut self, child: E) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Element for SchemaFieldElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let tag = StartTag::new(self.tag)
            .with_attr("name", self.name.as_str())
            .with_attr("type", self.field_type.as_str());
        encoder.children(&tag, &self.children)
    }
}

/// A `<value>` element whose text comes from a dynamically typed [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueElement(pub Value);

impl Element for ValueElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.leaf(&StartTag::new("value"), &self.0.to_string())
    }
}

/// `<Schema id="..">`. Give it a name with
/// [`with_name`](SharedElement::with_name) or use [`named_schema`].
pub fn schema(id: impl Into<String>, children: Vec<Box<dyn Element>>) -> SharedElement {
    SharedElement::new("Schema", id, children)
}

/// `<Schema id=".." name="..">`.
pub fn named_schema(
    id: impl Into<String>,
    name: impl Into<String>,
    children: Vec<Box<dyn Element>>,
) -> SharedElement {
    schema(id, children).with_name(name)
}

/// `<SimpleField name=".." type="..">`.
pub fn simple_field(
    name: impl Into<String>,
    field_type: impl Into<String>,
    children: Vec<Box<dyn Element>>,
) -> SchemaFieldElement {
    SchemaFieldElement::new("SimpleField", name, field_type, children)
}

/// `<gx:SimpleArrayField name=".." type="..">`.
pub fn gx_simple_array_field(
    name: impl Into<String>,
    field_type: impl Into<String>,
    children: Vec<Box<dyn Element>>,
) -> SchemaFieldElement {
    SchemaFieldElement::new("gx:SimpleArrayField", name, field_type, children)
}

/// `<SchemaData schemaUrl="..">`.
pub fn schema_data(schema_url: impl Into<String>, children: Vec<Box<dyn Element>>) -> CompoundElement {
    CompoundElement::with_tag(
        StartTag::new("SchemaData").with_attr("schemaUrl", schema_url),
        children,
    )
}

/// `<SimpleData name="..">value</SimpleData>`.
pub fn simple_data(name: impl Into<String>, value: &str) -> SimpleElement {
    SimpleElement::with_tag(StartTag::new("SimpleData").with_attr("name", name), value)
}

/// `<Data name="..">`.
pub fn data(name: impl Into<String>, children: Vec<Box<dyn Element>>) -> CompoundElement {
    CompoundElement::with_tag(StartTag::new("Data").with_attr("name", name), children)
}

/// `<gx:SimpleArrayData name="..">`.
pub fn gx_simple_array_data(name: impl Into<String>, children: Vec<Box<dyn Element>>) -> CompoundElement {
    CompoundElement::with_tag(
        StartTag::new("gx:SimpleArrayData").with_attr("name", name),
        children,
    )
}

/// `<value>` from any supported scalar.
pub fn value(value: impl Into<Value>) -> ValueElement {
    ValueElement(value.into())
}

/// `<gx:value>` with text.
pub fn gx_value(value: &str) -> SimpleElement {
    SimpleElement::new("gx:value", value)
}

pub fn gx_float64_value(value: f64) -> SimpleElement {
    SimpleElement::with_tag(StartTag::new("gx:value"), format_float(value))
}

pub fn gx_int_value(value: i64) -> SimpleElement {
    SimpleElement::with_tag(StartTag::new("gx:value"), format_int(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;

    #[test]
    fn test_schema() {
        let s = named_schema(
            "TrailHeadTypeId",
            "TrailHeadType",
            elements![simple_field("TrailHeadName", "string", elements![])],
        );
        assert_eq!(s.url(), "#TrailHeadTypeId");
        assert_eq!(
            s.to_xml_string().unwrap(),
            r#"<Schema id="TrailHeadTypeId" name="TrailHeadType"><SimpleField name="TrailHeadName" type="string"></SimpleField></Schema>"#
        );
    }

    #[test]
    fn test_schema_field_always_has_both_attributes() {
        let f = gx_simple_array_field("", "", elements![]);
        assert_eq!(
            f.to_xml_string().unwrap(),
            r#"<gx:SimpleArrayField name="" type=""></gx:SimpleArrayField>"#
        );
    }

    #[test]
    fn test_schema_data() {
        let d = schema_data(
            "#TrailHeadTypeId",
            elements![simple_data("TrailHeadName", "Pi in the sky")],
        );
        assert_eq!(
            d.to_xml_string().unwrap(),
            r##"<SchemaData schemaUrl="#TrailHeadTypeId"><SimpleData name="TrailHeadName">Pi in the sky</SimpleData></SchemaData>"##
        );
    }

    #[test]
    fn test_data_value() {
        let d = data("holeNumber", elements![value(1i32)]);
        assert_eq!(
            d.to_xml_string().unwrap(),
            r#"<Data name="holeNumber"><value>1</value></Data>"#
        );
        assert_eq!(value(true).to_xml_string().unwrap(), "<value>true</value>");
        assert_eq!(value(Value::Nil).to_xml_string().unwrap(), "<value></value>");
        assert_eq!(
            value(Value::CharData("<b>a & b".into())).to_xml_string().unwrap(),
            "<value>&lt;b&gt;a &amp; b</value>"
        );
        assert_eq!(value("a & b").to_xml_string().unwrap(), "<value>a &amp; b</value>");
    }

    #[test]
    fn test_gx_values() {
        assert_eq!(gx_float64_value(1.5).to_xml_string().unwrap(), "<gx:value>1.5</gx:value>");
        assert_eq!(gx_int_value(-3).to_xml_string().unwrap(), "<gx:value>-3</gx:value>");
        let data = gx_simple_array_data("cadence", elements![gx_value("86")]);
        assert_eq!(
            data.to_xml_string().unwrap(),
            r#"<gx:SimpleArrayData name="cadence"><gx:value>86</gx:value></gx:SimpleArrayData>"#
        );
    }
}
