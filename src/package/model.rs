//! Structural model of a Python package
//!
//! Modules, classes, functions and attributes as declared in source, in
//! declaration order. Built by [`super::PackageLoader`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexMap;

/// Name of the instance constructor.
pub const CONSTRUCTOR: &str = "__init__";

/// How an attribute is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeLabel {
    /// Bound on the class object itself (enum values, constants)
    ClassAttribute,
    /// Bound per instance (annotated declarations, `self.x` in `__init__`)
    InstanceAttribute,
}

impl AttributeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeLabel::ClassAttribute => "class-attribute",
            AttributeLabel::InstanceAttribute => "instance-attribute",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub annotation: Option<String>,
    /// Source text of the assigned value
    pub value: Option<String>,
    pub docstring: Option<String>,
    pub labels: BTreeSet<AttributeLabel>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, label: AttributeLabel) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            value: None,
            docstring: None,
            labels: BTreeSet::from([label]),
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    pub fn has_label(&self, label: AttributeLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_class_attribute(&self) -> bool {
        self.has_label(AttributeLabel::ClassAttribute)
    }

    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }

    /// Fold a later declaration of the same name into this one.
    ///
    /// The later value always replaces the earlier one; annotation and
    /// docstring are only replaced when the later declaration has them.
    pub fn merge(&mut self, later: Attribute) {
        self.labels.extend(later.labels);
        self.value = later.value;
        if later.annotation.is_some() {
            self.annotation = later.annotation;
        }
        if later.docstring.is_some() {
            self.docstring = later.docstring;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Regular,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub annotation: Option<String>,
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Regular,
            annotation: None,
            default: None,
        }
    }

    /// Name as written in a signature, star prefix included.
    pub fn display_name(&self) -> String {
        match self.kind {
            ParameterKind::Regular => self.name.clone(),
            ParameterKind::VarPositional => format!("*{}", self.name),
            ParameterKind::VarKeyword => format!("**{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub returns: Option<String>,
    pub docstring: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: None,
            docstring: None,
        }
    }

    /// Double-underscore names such as `__init__` or `__repr__`.
    pub fn is_special(&self) -> bool {
        self.name.len() > 4 && self.name.starts_with("__") && self.name.ends_with("__")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    /// Source text of each base expression
    pub bases: Vec<String>,
    pub docstring: Option<String>,
    pub functions: IndexMap<String, Function>,
    pub attributes: IndexMap<String, Attribute>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            docstring: None,
            functions: IndexMap::new(),
            attributes: IndexMap::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        match self.attributes.get_mut(&attribute.name) {
            Some(existing) => existing.merge(attribute),
            None => {
                self.attributes.insert(attribute.name.clone(), attribute);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Dotted path relative to the package root (`""` for the root itself)
    pub path: String,
    pub filepath: PathBuf,
    pub classes: IndexMap<String, Class>,
    pub functions: IndexMap<String, Function>,
}

impl Module {
    pub fn new(path: impl Into<String>, filepath: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filepath: filepath.into(),
            classes: IndexMap::new(),
            functions: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub root: PathBuf,
    pub modules: IndexMap<String, Module>,
}

impl Package {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            modules: IndexMap::new(),
        }
    }

    /// Look up a module by dotted path relative to the package root.
    pub fn module(&self, path: &str) -> Option<&Module> {
        self.modules.get(path)
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.insert(module.path.clone(), module);
    }
}
