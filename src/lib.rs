pub mod config;
pub mod docs;
pub mod error;
pub mod generator;
pub mod package;
pub mod python;
pub mod render;

pub use config::{ApiSource, DocgenConfig};
pub use docs::{
    AttrInfo, AttributeParser, ClassInfo, ClassParser, DebugPrinter, EnumParser, FuncInfo,
    FunctionParser, ParamInfo, ResourceReader,
};
pub use error::{DocgenError, Result};
pub use generator::{DocumentationGenerator, GenerationReport};
pub use package::{Package, PackageLoader};
pub use python::{PythonGrammar, PythonParser};
pub use render::{AgentDocsRenderer, ClassDocsRenderer, MdxRenderer};
