//! # Group Descriptors and Schemas

use crate::alloc::{sync::Arc, vec::Vec};

/// A single named capture group in a [`CaptureSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupDescriptor {
    name: Arc<str>,
    optional: bool,
}

impl GroupDescriptor {
    /// Create a new descriptor.
    pub fn new(
        name: impl Into<Arc<str>>,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            optional,
        }
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared group name.
    pub fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    /// May this group be absent from a successful match?
    pub fn optional(&self) -> bool {
        self.optional
    }
}

/// The ordered named capture groups of a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CaptureSchema {
    groups: Vec<GroupDescriptor>,
}

impl From<Vec<GroupDescriptor>> for CaptureSchema {
    fn from(groups: Vec<GroupDescriptor>) -> Self {
        Self { groups }
    }
}

impl<'a> IntoIterator for &'a CaptureSchema {
    type Item = &'a GroupDescriptor;
    type IntoIter = core::slice::Iter<'a, GroupDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl CaptureSchema {
    /// The number of named groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Does the pattern have no named groups?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The descriptors, in textual order.
    pub fn groups(&self) -> &[GroupDescriptor] {
        &self.groups
    }

    /// Iterate over the descriptors, in textual order.
    pub fn iter(&self) -> core::slice::Iter<'_, GroupDescriptor> {
        self.groups.iter()
    }

    /// Iterate over the group names, in textual order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(GroupDescriptor::name)
    }

    /// Find the position of a named group.
    pub fn position(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.groups.iter().position(|g| g.name() == name)
    }

    /// Look up a named group.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&GroupDescriptor> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Is the named group optional?
    ///
    /// ## Returns
    /// `None` if the schema has no group by that name.
    pub fn is_optional(
        &self,
        name: &str,
    ) -> Option<bool> {
        self.get(name).map(GroupDescriptor::optional)
    }

    /// The groups guaranteed to participate in every match.
    pub fn required(&self) -> impl Iterator<Item = &GroupDescriptor> {
        self.groups.iter().filter(|g| !g.optional())
    }

    /// The groups which may be absent from a match.
    pub fn optional(&self) -> impl Iterator<Item = &GroupDescriptor> {
        self.groups.iter().filter(|g| g.optional())
    }
}
