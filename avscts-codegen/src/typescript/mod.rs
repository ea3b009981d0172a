//! TypeScript code generation modules.

pub mod declarations;
pub mod document;
pub mod fields;
pub mod naming;
pub mod primitives;
pub mod resolver;

pub use declarations::Declaration;
pub use document::DocumentGenerator;
pub use fields::translate_field;
pub use naming::derive_name;
pub use primitives::ts_primitive;
pub use resolver::TypeResolver;
