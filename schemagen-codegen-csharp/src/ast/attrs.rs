//! Typed C# attributes for semantic code generation.
//!
//! Instead of passing raw strings like `"Newtonsoft.Json.JsonProperty(\"id\")"`,
//! use typed attributes that are rendered to the appropriate syntax.

use std::fmt;

/// How Newtonsoft.Json treats a missing or null property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {
    /// Must be present and non-null.
    Always,
    /// Must be present, may be null.
    AllowNull,
    /// May be omitted; nulls are skipped when serializing.
    Default,
}

/// C# attribute emitted on generated declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum CSharpAttr {
    /// `[System.CodeDom.Compiler.GeneratedCode("tool", "version")]`
    GeneratedCode { tool: String, version: String },
    /// `[Newtonsoft.Json.JsonProperty("name", Required = ...)]`
    JsonProperty { name: String, required: Required },
    /// `[Newtonsoft.Json.JsonConverter(typeof(Newtonsoft.Json.Converters.StringEnumConverter))]`
    StringEnumConverter,
    /// `[System.Runtime.Serialization.EnumMember(Value = @"value")]`
    EnumMember(String),
}

impl CSharpAttr {
    /// Create a generated-code attribute naming this tool.
    pub fn generated_code() -> Self {
        Self::GeneratedCode {
            tool: "schemagen".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Create a JSON property attribute.
    pub fn json_property(name: impl Into<String>, required: Required) -> Self {
        Self::JsonProperty {
            name: name.into(),
            required,
        }
    }

    /// Create an enum member attribute.
    pub fn enum_member(value: impl Into<String>) -> Self {
        Self::EnumMember(value.into())
    }
}

impl fmt::Display for CSharpAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneratedCode { tool, version } => write!(
                f,
                "[System.CodeDom.Compiler.GeneratedCode({}, {})]",
                string_literal(tool),
                string_literal(version)
            ),
            Self::JsonProperty { name, required } => {
                write!(f, "[Newtonsoft.Json.JsonProperty({}", string_literal(name))?;
                match required {
                    Required::Always => write!(f, ", Required = Newtonsoft.Json.Required.Always")?,
                    Required::AllowNull => {
                        write!(f, ", Required = Newtonsoft.Json.Required.AllowNull")?
                    }
                    Required::Default => write!(
                        f,
                        ", Required = Newtonsoft.Json.Required.Default, \
                         NullValueHandling = Newtonsoft.Json.NullValueHandling.Ignore"
                    )?,
                }
                write!(f, ")]")
            }
            Self::StringEnumConverter => write!(
                f,
                "[Newtonsoft.Json.JsonConverter(typeof(Newtonsoft.Json.Converters.StringEnumConverter))]"
            ),
            Self::EnumMember(value) => write!(
                f,
                "[System.Runtime.Serialization.EnumMember(Value = {})]",
                verbatim_literal(value)
            ),
        }
    }
}

/// Render `value` as a regular C# string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render `value` as a verbatim (`@"..."`) C# string literal.
pub fn verbatim_literal(value: &str) -> String {
    format!("@\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_property_attr() {
        assert_eq!(
            CSharpAttr::json_property("id", Required::Always).to_string(),
            "[Newtonsoft.Json.JsonProperty(\"id\", Required = Newtonsoft.Json.Required.Always)]"
        );
        assert_eq!(
            CSharpAttr::json_property("label", Required::Default).to_string(),
            "[Newtonsoft.Json.JsonProperty(\"label\", Required = Newtonsoft.Json.Required.Default, \
             NullValueHandling = Newtonsoft.Json.NullValueHandling.Ignore)]"
        );
    }

    #[test]
    fn test_enum_member_attr() {
        assert_eq!(
            CSharpAttr::enum_member(">=").to_string(),
            "[System.Runtime.Serialization.EnumMember(Value = @\">=\")]"
        );
        assert_eq!(
            CSharpAttr::enum_member("say \"hi\"").to_string(),
            "[System.Runtime.Serialization.EnumMember(Value = @\"say \"\"hi\"\"\")]"
        );
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(string_literal("quote\"d"), "\"quote\\\"d\"");
        assert_eq!(string_literal("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_generated_code_attr() {
        let attr = CSharpAttr::generated_code().to_string();
        assert!(attr.starts_with("[System.CodeDom.Compiler.GeneratedCode(\"schemagen\", \""));
    }
}
