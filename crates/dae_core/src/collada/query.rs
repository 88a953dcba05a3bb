//! Typed path queries against an opened COLLADA document.
//!
//! Paths are built step by step instead of being formatted into an
//! expression string, so ids and names taken from the document never end up
//! inside the expression syntax:
//!
//! ```ignore
//! let path = collada()
//!     .child("library_geometries")
//!     .child("geometry")
//!     .nth(2)
//!     .child("mesh")
//!     .child("polylist")
//!     .attribute("count");
//! let count = document.evaluate(&path);
//! ```

use std::fmt;

/// Element name test of a path step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameTest {
    /// Any element
    Any,

    /// Element with exactly this name
    Exact(String),

    /// Element whose name starts with this prefix
    Prefix(String),

    /// Element with one of these names
    AnyOf(Vec<String>),
}

impl NameTest {
    /// Check an element name against this test.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameTest::Any => true,
            NameTest::Exact(expected) => name == expected,
            NameTest::Prefix(prefix) => name.starts_with(prefix.as_str()),
            NameTest::AnyOf(names) => names.iter().any(|n| n == name),
        }
    }
}

/// Predicate narrowing the elements selected by a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// 1-based position within everything the step selected so far
    Position(usize),

    /// Attribute equal to a value
    Attribute { name: String, value: String },

    /// Has a direct child element matching the test
    HasChild(NameTest),
}

/// Direction a step walks from its context elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Direct children
    Child,

    /// All descendants, in document order
    Descendant,
}

/// One step of an element path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NameTest,
    pub filters: Vec<Filter>,
}

/// Path selecting a set of elements, starting at the document root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementPath {
    steps: Vec<Step>,
}

impl ElementPath {
    /// Start a path at the document root element with the given name.
    pub fn root(name: &str) -> Self {
        Self {
            steps: vec![Step {
                axis: Axis::Child,
                test: NameTest::Exact(name.to_string()),
                filters: Vec::new(),
            }],
        }
    }

    /// Steps of this path, the first one matching the root element.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn push_step(mut self, axis: Axis, test: NameTest) -> Self {
        self.steps.push(Step {
            axis,
            test,
            filters: Vec::new(),
        });
        self
    }

    fn push_filter(mut self, filter: Filter) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.filters.push(filter);
        }
        self
    }

    /// Select direct children with the given name.
    pub fn child(self, name: &str) -> Self {
        self.push_step(Axis::Child, NameTest::Exact(name.to_string()))
    }

    /// Select all direct child elements.
    pub fn child_any(self) -> Self {
        self.push_step(Axis::Child, NameTest::Any)
    }

    /// Select direct children whose name starts with `prefix`.
    pub fn child_with_prefix(self, prefix: &str) -> Self {
        self.push_step(Axis::Child, NameTest::Prefix(prefix.to_string()))
    }

    /// Select direct children having any of the given names, in document order.
    pub fn child_any_of(self, names: &[&str]) -> Self {
        let names = names.iter().map(|n| n.to_string()).collect();
        self.push_step(Axis::Child, NameTest::AnyOf(names))
    }

    /// Select descendants with the given name.
    pub fn descendant(self, name: &str) -> Self {
        self.push_step(Axis::Descendant, NameTest::Exact(name.to_string()))
    }

    /// Keep only the `position`-th (1-based) element selected by the last step.
    pub fn nth(self, position: usize) -> Self {
        self.push_filter(Filter::Position(position))
    }

    /// Keep elements whose attribute `name` equals `value`.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.push_filter(Filter::Attribute {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Keep elements having a direct child with the given name.
    pub fn with_child(self, name: &str) -> Self {
        self.push_filter(Filter::HasChild(NameTest::Exact(name.to_string())))
    }

    /// Keep elements having a direct child whose name starts with `prefix`.
    pub fn with_child_prefix(self, prefix: &str) -> Self {
        self.push_filter(Filter::HasChild(NameTest::Prefix(prefix.to_string())))
    }

    /// Select the value of attribute `name` of every matched element.
    pub fn attribute(self, name: &str) -> Query {
        Query {
            path: self,
            select: Select::Attribute(name.to_string()),
        }
    }

    /// Select the text content of every matched element.
    pub fn text(self) -> Query {
        Query {
            path: self,
            select: Select::Text,
        }
    }

    /// Select the name of every matched element.
    pub fn name(self) -> Query {
        Query {
            path: self,
            select: Select::Name,
        }
    }
}

/// What a query returns for each matched element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Select {
    Attribute(String),
    Text,
    Name,
}

/// An element path plus the value to extract from each matched element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub path: ElementPath,
    pub select: Select,
}

/// Read access to an opened document through path queries.
pub trait DocumentQuery {
    /// Number of elements matched by `path`.
    fn count(&self, path: &ElementPath) -> usize;

    /// All values selected by `query`, trimmed, in document order.
    fn evaluate_list(&self, query: &Query) -> Vec<String>;

    /// First value selected by `query`, or an empty string.
    fn evaluate(&self, query: &Query) -> String {
        self.evaluate_list(query)
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}

/// Path to the `<COLLADA>` root element.
pub fn collada() -> ElementPath {
    ElementPath::root("COLLADA")
}

/// Strip the leading `#` of a local URL reference (`#Cube-mesh` → `Cube-mesh`).
pub fn strip_url(url: &str) -> &str {
    let url = url.trim();
    url.strip_prefix('#').unwrap_or(url)
}

impl fmt::Display for NameTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameTest::Any => write!(f, "*"),
            NameTest::Exact(name) => write!(f, "{}", name),
            NameTest::Prefix(prefix) => write!(f, "{}*", prefix),
            NameTest::AnyOf(names) => write!(f, "({})", names.join("|")),
        }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step.axis {
                Axis::Child => write!(f, "/{}", step.test)?,
                Axis::Descendant => write!(f, "//{}", step.test)?,
            }
            for filter in &step.filters {
                match filter {
                    Filter::Position(n) => write!(f, "[{}]", n)?,
                    Filter::Attribute { name, value } => write!(f, "[@{}={:?}]", name, value)?,
                    Filter::HasChild(test) => write!(f, "[{}]", test)?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.select {
            Select::Attribute(name) => write!(f, "{}/@{}", self.path, name),
            Select::Text => write!(f, "{}/text()", self.path),
            Select::Name => write!(f, "{}/name()", self.path),
        }
    }
}
