use indexmap::IndexMap;

use crate::docs::types::{FuncInfo, ParamInfo};
use crate::package::{Function, ParameterKind};

pub use crate::package::CONSTRUCTOR;

const SELF_PARAM: &str = "self";
const MISSING_RETURN: &str = "None";

pub struct FunctionParser;

impl FunctionParser {
    /// Parse callables into name → signature, in the order given.
    ///
    /// Special methods are skipped except the constructor, and the
    /// `self` parameter is dropped.
    pub fn parse_functions<'a>(
        funcs: impl IntoIterator<Item = &'a Function>,
    ) -> IndexMap<String, FuncInfo> {
        let mut functions = IndexMap::new();

        for func in funcs {
            if func.is_special() && func.name != CONSTRUCTOR {
                continue;
            }

            let params = func
                .parameters
                .iter()
                .filter(|p| !(p.kind == ParameterKind::Regular && p.name == SELF_PARAM))
                .map(|p| ParamInfo {
                    name: p.display_name(),
                    annotation: p.annotation.clone().unwrap_or_default(),
                    default: p.default.clone(),
                })
                .collect();

            functions.insert(
                func.name.clone(),
                FuncInfo {
                    name: func.name.clone(),
                    params,
                    return_type: func
                        .returns
                        .clone()
                        .unwrap_or_else(|| MISSING_RETURN.to_string()),
                    docstring: func.docstring.clone(),
                },
            );
        }

        functions
    }
}
