//! In-memory XML document answering path queries.

use std::io::Read;

use xmltree::{Element, XMLNode};

use super::query::{Axis, DocumentQuery, ElementPath, Filter, NameTest, Query, Select};

/// Parsed XML tree backing a COLLADA document.
#[derive(Debug)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    /// Parse a whole document from a reader.
    pub fn parse<R: Read>(reader: R) -> Result<Self, xmltree::ParseError> {
        let root = Element::parse(reader)?;
        Ok(Self { root })
    }

    /// Local name of the root element.
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Namespace URI of the root element, empty when there is none.
    pub fn root_namespace(&self) -> &str {
        self.root.namespace.as_deref().unwrap_or("")
    }

    /// Attribute of the root element.
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root.attributes.get(name).map(String::as_str)
    }

    /// Elements matched by `path`, in document order.
    pub fn select(&self, path: &ElementPath) -> Vec<&Element> {
        let mut steps = path.steps().iter();
        let Some(first) = steps.next() else {
            return Vec::new();
        };

        let mut current = if first.test.matches(&self.root.name) {
            vec![&self.root]
        } else {
            Vec::new()
        };
        current = apply_filters(current, &first.filters);

        for step in steps {
            let mut next = Vec::new();
            for &element in &current {
                match step.axis {
                    Axis::Child => next.extend(
                        child_elements(element).filter(|child| step.test.matches(&child.name)),
                    ),
                    Axis::Descendant => collect_descendants(element, &step.test, &mut next),
                }
            }
            current = apply_filters(next, &step.filters);
            if current.is_empty() {
                break;
            }
        }

        current
    }
}

impl DocumentQuery for XmlDocument {
    fn count(&self, path: &ElementPath) -> usize {
        self.select(path).len()
    }

    fn evaluate_list(&self, query: &Query) -> Vec<String> {
        let elements = self.select(&query.path);
        match &query.select {
            Select::Attribute(name) => elements
                .iter()
                .filter_map(|e| e.attributes.get(name))
                .map(|value| value.trim().to_string())
                .collect(),
            Select::Text => elements
                .iter()
                .map(|e| {
                    let mut text = String::new();
                    collect_text(e, &mut text);
                    text.trim().to_string()
                })
                .collect(),
            Select::Name => elements.iter().map(|e| e.name.clone()).collect(),
        }
    }
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

fn collect_descendants<'a>(element: &'a Element, test: &NameTest, out: &mut Vec<&'a Element>) {
    for child in child_elements(element) {
        if test.matches(&child.name) {
            out.push(child);
        }
        collect_descendants(child, test, out);
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            XMLNode::Text(text) | XMLNode::CData(text) => {
                // Adjacent text runs are separate tokens
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            XMLNode::Element(child) => collect_text(child, out),
            _ => {}
        }
    }
}

fn apply_filters<'a>(mut elements: Vec<&'a Element>, filters: &[Filter]) -> Vec<&'a Element> {
    for filter in filters {
        elements = match filter {
            Filter::Position(position) => position
                .checked_sub(1)
                .and_then(|index| elements.get(index).copied())
                .into_iter()
                .collect(),
            Filter::Attribute { name, value } => elements
                .into_iter()
                .filter(|e| e.attributes.get(name).map(String::as_str) == Some(value.as_str()))
                .collect(),
            Filter::HasChild(test) => elements
                .into_iter()
                .filter(|e| child_elements(e).any(|child| test.matches(&child.name)))
                .collect(),
        };
    }
    elements
}
