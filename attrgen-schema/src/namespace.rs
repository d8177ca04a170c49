//! Attribute descriptors organized into a namespace hierarchy.

use regex::Regex;

/// A leaf attribute: the accessor name and the opaque key it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Accessor name in the generated class.
    pub name: String,
    /// Full attribute key (e.g. `rcsb_entry_info.resolution_combined`).
    pub attribute: String,
    /// Documentation string.
    pub doc: Option<String>,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A member of a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Namespace(Namespace),
    Attribute(AttributeDescriptor),
}

impl Member {
    /// The member's name within its parent.
    pub fn name(&self) -> &str {
        match self {
            Self::Namespace(ns) => &ns.name,
            Self::Attribute(attr) => &attr.name,
        }
    }
}

impl From<Namespace> for Member {
    fn from(ns: Namespace) -> Self {
        Self::Namespace(ns)
    }
}

impl From<AttributeDescriptor> for Member {
    fn from(attr: AttributeDescriptor) -> Self {
        Self::Attribute(attr)
    }
}

/// A non-leaf node of the attribute hierarchy.
///
/// Members keep their declaration order, which is also the order in which
/// they are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub doc: Option<String>,
    pub members: Vec<Member>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a nested namespace or attribute.
    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Add several members at once.
    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Rename this namespace.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The two-level example tree: `Foo` holding `Bar` holding `prop`.
    pub fn example() -> Self {
        Namespace::new("Foo").doc("a Foo").member(
            Namespace::new("Bar")
                .doc("a Bar")
                .member(AttributeDescriptor::new("prop", "rcsb_prop")),
        )
    }

    /// Iterate over all leaf attributes, depth first, in declaration order.
    pub fn attributes(&self) -> Attributes<'_> {
        Attributes {
            stack: vec![self.members.iter()],
        }
    }

    /// Find all attributes whose key matches a regular expression.
    pub fn search<'a>(
        &'a self,
        pattern: &'a Regex,
    ) -> impl Iterator<Item = &'a AttributeDescriptor> + 'a {
        self.attributes()
            .filter(move |attr| pattern.is_match(&attr.attribute))
    }

    /// Number of leaf attributes in the whole subtree.
    pub fn leaf_count(&self) -> usize {
        self.attributes().count()
    }

    /// Number of namespaces in the subtree, including this one.
    pub fn namespace_count(&self) -> usize {
        1 + self
            .members
            .iter()
            .map(|m| match m {
                Member::Namespace(ns) => ns.namespace_count(),
                Member::Attribute(_) => 0,
            })
            .sum::<usize>()
    }
}

/// Depth-first iterator over the leaves of a [`Namespace`].
#[derive(Debug)]
pub struct Attributes<'a> {
    stack: Vec<std::slice::Iter<'a, Member>>,
}

impl<'a> Iterator for Attributes<'a> {
    type Item = &'a AttributeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Member::Attribute(attr)) => return Some(attr),
                Some(Member::Namespace(ns)) => self.stack.push(ns.members.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
