//! Node numbering of the allocation network.

use crate::flow::NodeId;

/// Maps people, slots, groups, source, and sink to node ids.
///
/// Nodes are laid out as `N` people, then a (licensed slot, open slot) pair
/// per group, then `G` group nodes, then the super source and super sink.
///
/// # Examples
///
/// ```
/// use u_carpool::compiler::NodeLayout;
///
/// let layout = NodeLayout::new(7, 2);
/// assert_eq!(layout.person(3), 3);
/// assert_eq!(layout.licensed_slot(1), 9);
/// assert_eq!(layout.open_slot(1), 10);
/// assert_eq!(layout.group(0), 11);
/// assert_eq!(layout.source(), 13);
/// assert_eq!(layout.sink(), 14);
/// assert_eq!(layout.node_count(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLayout {
    people: usize,
    groups: usize,
}

impl NodeLayout {
    /// Creates the layout for `people` participants and `groups` groups.
    pub fn new(people: usize, groups: usize) -> Self {
        Self { people, groups }
    }

    /// Number of people.
    pub fn people(&self) -> usize {
        self.people
    }

    /// Number of groups.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Node of a person.
    pub fn person(&self, id: usize) -> NodeId {
        id
    }

    /// Node through which licensed people reach `group`.
    pub fn licensed_slot(&self, group: usize) -> NodeId {
        self.people + 2 * group
    }

    /// Node through which unlicensed people (and, once relaxed, surplus
    /// drivers) reach `group`.
    pub fn open_slot(&self, group: usize) -> NodeId {
        self.people + 2 * group + 1
    }

    /// Node of a group.
    pub fn group(&self, group: usize) -> NodeId {
        self.people + 2 * self.groups + group
    }

    /// Super source.
    pub fn source(&self) -> NodeId {
        self.people + 3 * self.groups
    }

    /// Super sink.
    pub fn sink(&self) -> NodeId {
        self.source() + 1
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.sink() + 1
    }

    /// Table from node id to the group owning it, for slot nodes only.
    pub fn slot_owners(&self) -> Vec<Option<usize>> {
        let mut owners = vec![None; self.node_count()];
        for g in 0..self.groups {
            owners[self.licensed_slot(g)] = Some(g);
            owners[self.open_slot(g)] = Some(g);
        }
        owners
    }
}
