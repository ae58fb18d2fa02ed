pub mod loader;
pub mod model;
pub mod visitor;

pub use loader::{PackageLoader, CACHE_DIR};
pub use model::{
    Attribute, AttributeLabel, Class, Function, Module, Package, Parameter, ParameterKind,
    CONSTRUCTOR,
};
pub use visitor::ModuleVisitor;
