//! Language-neutral declarations lowered from a schema.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    String,
    Integer,
    Number,
    Boolean,
    /// A string with `format: date-time`.
    DateTime,
    /// Anything, used where the schema doesn't pin down a type.
    Any,
    Array(Box<TypeRef>),
    /// An object with arbitrary string keys.
    Map(Box<TypeRef>),
    /// A declared type from the same model.
    Named(String),
    /// The inner type or `null`.
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn map(inner: TypeRef) -> Self {
        Self::Map(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap in [`TypeRef::Nullable`] unless already nullable or `Any`.
    pub fn nullable(self) -> Self {
        match self {
            Self::Any | Self::Nullable(_) => self,
            other => Self::Nullable(Box::new(other)),
        }
    }

    /// Whether the type admits `null`.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

/// A property of an [`ObjectDecl`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    /// Key in the JSON document.
    pub json_name: String,
    /// Generated member name.
    pub name: String,
    pub ty: TypeRef,
    pub required: bool,
    pub description: Option<String>,
}

/// A record type with named properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    pub name: String,
    pub description: Option<String>,
    pub properties: Vec<PropertyDecl>,
}

/// The literal behind an enum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    String(String),
    Integer(i64),
}

/// One member of an [`EnumDecl`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: EnumValue,
}

/// An enumeration of string or integer literals.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<EnumMember>,
}

impl EnumDecl {
    /// Whether all members carry integer values.
    pub fn is_integer(&self) -> bool {
        self.members
            .iter()
            .all(|m| matches!(m.value, EnumValue::Integer(_)))
    }
}

/// A named alias for a non-record type (e.g. a root schema that is an
/// array).
#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub name: String,
    pub description: Option<String>,
    pub target: TypeRef,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Object(ObjectDecl),
    Enum(EnumDecl),
    Alias(AliasDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Object(decl) => &decl.name,
            TypeDecl::Enum(decl) => &decl.name,
            TypeDecl::Alias(decl) => &decl.name,
        }
    }
}

/// All declarations lowered from one schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeModel {
    /// Name of the root type.
    pub root: String,
    /// Declarations: the root first, then definitions, then inline types.
    pub types: Vec<TypeDecl>,
    /// Non-fatal problems found while lowering (e.g. renamed collisions).
    pub warnings: Vec<String>,
}

impl TypeModel {
    /// Find a declaration by generated name.
    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|decl| decl.name() == name)
    }
}
