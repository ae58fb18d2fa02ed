use tree_sitter::Node;

use crate::package::model::{
    Attribute, AttributeLabel, Class, Function, Module, Parameter, ParameterKind, CONSTRUCTOR,
};
use crate::python::{cleandoc, string_node_value, ParsedFile};

/// Builds the declarations of one module from its syntax tree.
pub struct ModuleVisitor<'a> {
    parsed: &'a ParsedFile,
}

impl<'a> ModuleVisitor<'a> {
    pub fn new(parsed: &'a ParsedFile) -> Self {
        Self { parsed }
    }

    pub fn visit(&self, module: &mut Module) {
        let root = self.parsed.root_node();
        for statement in statements(root) {
            let definition = unwrap_decorated(statement);
            match definition.kind() {
                "class_definition" => {
                    if let Some(class) = self.visit_class(definition) {
                        module.classes.insert(class.name.clone(), class);
                    }
                }
                "function_definition" => {
                    if let Some(function) = self.visit_function(definition) {
                        module.functions.insert(function.name.clone(), function);
                    }
                }
                _ => {}
            }
        }
    }

    fn text(&self, node: &Node) -> &str {
        self.parsed.node_text(node)
    }

    /// Annotation source text; a string forward reference yields its contents.
    fn annotation_text(&self, node: Node) -> String {
        let expr = match node.kind() {
            "type" if node.named_child_count() == 1 => node.named_child(0).unwrap_or(node),
            _ => node,
        };
        string_node_value(&expr, self.parsed.source_bytes())
            .map(|inner| inner.trim().to_string())
            .unwrap_or_else(|| self.text(&expr).to_string())
    }

    /// Cleaned docstring if `statement` is a bare string expression.
    fn string_statement(&self, statement: Node) -> Option<String> {
        if statement.kind() != "expression_statement" || statement.named_child_count() != 1 {
            return None;
        }
        let expr = statement.named_child(0)?;
        string_node_value(&expr, self.parsed.source_bytes()).map(|raw| cleandoc(&raw))
    }

    fn body_docstring(&self, body: Option<Node>) -> Option<String> {
        let body = body?;
        statements(body)
            .first()
            .and_then(|first| self.string_statement(*first))
    }

    fn visit_class(&self, node: Node) -> Option<Class> {
        let name = node.child_by_field_name("name")?;
        let mut class = Class::new(self.text(&name));

        if let Some(superclasses) = node.child_by_field_name("superclasses") {
            let mut cursor = superclasses.walk();
            class.bases = superclasses
                .named_children(&mut cursor)
                .filter(|base| !matches!(base.kind(), "keyword_argument" | "comment"))
                .map(|base| self.text(&base).to_string())
                .collect();
        }

        let body = node.child_by_field_name("body");
        class.docstring = self.body_docstring(body);

        let Some(body) = body else {
            return Some(class);
        };

        let members = statements(body);
        for (i, statement) in members.iter().enumerate() {
            let definition = unwrap_decorated(*statement);
            match definition.kind() {
                "function_definition" => {
                    if let Some(function) = self.visit_function(definition) {
                        if function.name == CONSTRUCTOR {
                            if let Some(init_body) = definition.child_by_field_name("body") {
                                self.visit_init_block(init_body, &mut class);
                            }
                        }
                        class.functions.insert(function.name.clone(), function);
                    }
                }
                "expression_statement" => {
                    let next = members.get(i + 1).copied();
                    for attribute in self.class_body_attributes(definition, next) {
                        tracing::trace!(
                            "{}.{} ({})",
                            class.name,
                            attribute.name,
                            attribute
                                .labels
                                .iter()
                                .map(|label| label.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        );
                        class.add_attribute(attribute);
                    }
                }
                _ => {}
            }
        }

        Some(class)
    }

    fn visit_function(&self, node: Node) -> Option<Function> {
        let name = node.child_by_field_name("name")?;
        let mut function = Function::new(self.text(&name));

        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            function.parameters = params
                .named_children(&mut cursor)
                .filter_map(|param| self.visit_parameter(param))
                .collect();
        }

        function.returns = node
            .child_by_field_name("return_type")
            .map(|ret| self.annotation_text(ret));
        function.docstring = self.body_docstring(node.child_by_field_name("body"));

        Some(function)
    }

    fn visit_parameter(&self, node: Node) -> Option<Parameter> {
        let field_text = |field: &str| {
            node.child_by_field_name(field)
                .map(|child| self.text(&child).to_string())
        };
        let annotation = || {
            node.child_by_field_name("type")
                .map(|child| self.annotation_text(child))
        };

        match node.kind() {
            "identifier" => Some(Parameter::new(self.text(&node))),
            "list_splat_pattern" | "dictionary_splat_pattern" => self.splat_parameter(node),
            "typed_parameter" => {
                let target = node.named_child(0)?;
                let mut param = match target.kind() {
                    "identifier" => Parameter::new(self.text(&target)),
                    _ => self.splat_parameter(target)?,
                };
                param.annotation = annotation();
                Some(param)
            }
            "default_parameter" | "typed_default_parameter" => {
                let mut param = Parameter::new(field_text("name")?);
                param.annotation = annotation();
                param.default = field_text("value");
                Some(param)
            }
            // `*`, `/` separators and comments
            _ => None,
        }
    }

    fn splat_parameter(&self, node: Node) -> Option<Parameter> {
        let ident = node.named_child(0)?;
        let mut param = Parameter::new(self.text(&ident));
        param.kind = if node.kind() == "list_splat_pattern" {
            ParameterKind::VarPositional
        } else {
            ParameterKind::VarKeyword
        };
        Some(param)
    }

    /// Attributes declared directly in a class body.
    fn class_body_attributes(&self, statement: Node, next: Option<Node>) -> Vec<Attribute> {
        let Some(assignment) = statement
            .named_child(0)
            .filter(|child| child.kind() == "assignment")
        else {
            return Vec::new();
        };

        let (targets, annotation, value) = unwrap_assignment(assignment);
        let docstring = next.and_then(|n| self.string_statement(n));

        let mut label = AttributeLabel::InstanceAttribute;
        let mut annotation = annotation.map(|a| self.annotation_text(a));
        if let Some(inner) = annotation.as_deref().and_then(class_var_inner) {
            label = AttributeLabel::ClassAttribute;
            annotation = inner;
        } else if value.is_some() {
            label = AttributeLabel::ClassAttribute;
        }

        targets
            .into_iter()
            .filter(|target| target.kind() == "identifier")
            .map(|target| Attribute {
                name: self.text(&target).to_string(),
                annotation: annotation.clone(),
                value: value.map(|v| self.text(&v).to_string()),
                docstring: docstring.clone(),
                labels: [label].into(),
            })
            .collect()
    }

    /// Collect `self.<name>` assignments from a constructor body, nested blocks included.
    fn visit_init_block(&self, block: Node, class: &mut Class) {
        let body = statements(block);
        for (i, statement) in body.iter().enumerate() {
            match statement.kind() {
                "expression_statement" => {
                    let next = body.get(i + 1).copied();
                    for attribute in self.self_attributes(*statement, next) {
                        class.add_attribute(attribute);
                    }
                }
                "function_definition" | "class_definition" | "decorated_definition" => {}
                _ => self.visit_nested_blocks(*statement, class),
            }
        }
    }

    fn visit_nested_blocks(&self, node: Node, class: &mut Class) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "block" => self.visit_init_block(child, class),
                "function_definition" | "class_definition" | "decorated_definition"
                | "lambda" => {}
                _ => self.visit_nested_blocks(child, class),
            }
        }
    }

    fn self_attributes(&self, statement: Node, next: Option<Node>) -> Vec<Attribute> {
        let Some(assignment) = statement
            .named_child(0)
            .filter(|child| child.kind() == "assignment")
        else {
            return Vec::new();
        };

        let (targets, annotation, value) = unwrap_assignment(assignment);
        let docstring = next.and_then(|n| self.string_statement(n));

        targets
            .into_iter()
            .filter_map(|target| self.self_attribute_name(target))
            .map(|name| Attribute {
                name,
                annotation: annotation.map(|a| self.annotation_text(a)),
                value: value.map(|v| self.text(&v).to_string()),
                docstring: docstring.clone(),
                labels: [AttributeLabel::InstanceAttribute].into(),
            })
            .collect()
    }

    fn self_attribute_name(&self, target: Node) -> Option<String> {
        if target.kind() != "attribute" {
            return None;
        }
        let object = target.child_by_field_name("object")?;
        if object.kind() != "identifier" || self.text(&object) != "self" {
            return None;
        }
        let attribute = target.child_by_field_name("attribute")?;
        Some(self.text(&attribute).to_string())
    }
}

/// Named statements of a block or module, comments dropped.
fn statements(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

fn unwrap_decorated(node: Node<'_>) -> Node<'_> {
    if node.kind() == "decorated_definition" {
        if let Some(definition) = node.child_by_field_name("definition") {
            return definition;
        }
    }
    node
}

/// Flatten `a = b = value` into its targets, annotation and final value.
fn unwrap_assignment(
    assignment: Node<'_>,
) -> (Vec<Node<'_>>, Option<Node<'_>>, Option<Node<'_>>) {
    let annotation = assignment.child_by_field_name("type");
    let mut targets = Vec::new();
    let mut current = assignment;

    loop {
        if let Some(left) = current.child_by_field_name("left") {
            targets.push(left);
        }
        match current.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => current = right,
            right => return (targets, annotation, right),
        }
    }
}

/// `ClassVar[T]` → `Some(Some("T"))`, bare `ClassVar` → `Some(None)`.
fn class_var_inner(annotation: &str) -> Option<Option<String>> {
    let rest = annotation
        .strip_prefix("typing.")
        .unwrap_or(annotation)
        .strip_prefix("ClassVar")?;

    if rest.is_empty() {
        return Some(None);
    }

    let inner = rest.strip_prefix('[')?.strip_suffix(']')?;
    Some(Some(inner.trim().to_string()))
}
