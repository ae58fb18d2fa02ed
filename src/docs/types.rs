//! Flat records handed from the parsers to the renderers.

use indexmap::IndexMap;

/// One attribute of a class, or one enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrInfo {
    pub name: String,
    pub annotation: String,
    pub docstring: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamInfo {
    pub name: String,
    pub annotation: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncInfo {
    pub name: String,
    /// Declared order, `self` omitted
    pub params: Vec<ParamInfo>,
    pub return_type: String,
    pub docstring: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassInfo {
    pub functions: IndexMap<String, FuncInfo>,
    pub attributes: Vec<AttrInfo>,
    pub enum_members: Vec<AttrInfo>,
    pub docstring: Option<String>,
}
