//! Documentation records and the parsers that produce them
//!
//! Exported names are resolved to classes ([`ClassParser`]), allow-listed
//! methods are gathered into the agent API ([`ResourceReader`]), and each
//! class is broken down into attributes, enum constants and methods.

pub mod attributes;
pub mod classes;
pub mod docstring;
pub mod enums;
pub mod functions;
pub mod resources;
pub mod strings;
pub mod summary;
pub mod types;

pub use attributes::{default_echoes_name, AttributeParser};
pub use classes::{find_module_path, ClassParser};
pub use docstring::parse_attr_descriptions;
pub use enums::EnumParser;
pub use functions::{FunctionParser, CONSTRUCTOR};
pub use resources::ResourceReader;
pub use strings::pascal_to_snake;
pub use summary::DebugPrinter;
pub use types::{AttrInfo, ClassInfo, FuncInfo, ParamInfo};
