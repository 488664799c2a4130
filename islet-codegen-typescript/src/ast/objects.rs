//! TypeScript/JavaScript object literal builder.

use islet_codegen::{CodeFragment, Renderable};

use crate::naming::string_literal;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
struct Property {
    key: String,
    value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
enum PropertyValue {
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add a property whose key is a quoted string and whose value is raw.
    pub fn quoted_key(self, key: &str, value: impl Into<String>) -> Self {
        self.raw(string_literal(key), value)
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Object(value),
        });
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property lines, each terminated with a trailing comma.
    pub(crate) fn property_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", prop.key, s)),
                PropertyValue::Object(obj) if obj.is_empty() => {
                    CodeFragment::Line(format!("{}: {{}},", prop.key))
                }
                PropertyValue::Object(obj) => CodeFragment::Block {
                    header: format!("{}: {{", prop.key),
                    body: obj.property_fragments(),
                    close: Some("},".to_string()),
                },
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.property_fragments(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use islet_codegen::CodeBuilder;

    use super::*;

    fn build(obj: &JsObject) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(obj);
        builder.build()
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(build(&JsObject::new()), "{}");
    }

    #[test]
    fn test_object_with_raw() {
        let obj = build(&JsObject::new().raw("baseUrl", "import.meta.url"));
        assert!(obj.contains("baseUrl: import.meta.url,"));
    }

    #[test]
    fn test_quoted_key() {
        let obj = build(&JsObject::new().quoted_key("./routes/index.tsx", "$0"));
        assert!(obj.contains("\"./routes/index.tsx\": $0,"));
    }

    #[test]
    fn test_nested_object() {
        let inner = JsObject::new().quoted_key("./islands/Counter.tsx", "$$0");
        let outer = JsObject::new()
            .object("islands", inner)
            .object("routes", JsObject::new());
        assert_eq!(
            build(&outer),
            "{\n  islands: {\n    \"./islands/Counter.tsx\": $$0,\n  },\n  routes: {},\n}\n"
        );
    }
}
