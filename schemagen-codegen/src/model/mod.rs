//! The language-neutral type model emitters render from.

mod lower;
mod types;
mod unique;

pub use types::{
    AliasDecl, EnumDecl, EnumMember, EnumValue, ObjectDecl, PropertyDecl, TypeDecl, TypeModel,
    TypeRef,
};
pub use unique::UniqueNames;
