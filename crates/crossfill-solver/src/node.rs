//! Persistent search-tree nodes.

use std::{fmt, iter, sync::Arc};

use crossfill_core::{Board, SlotId, SlotTopology, Word, WordSource};
use log::debug;

use crate::{Assignment, DomainModel, EmptyDomain, Strictness};

/// How a search tree propagates each assignment.
///
/// The mode is fixed at the root and inherited by every descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Propagation {
    /// Propagate each assignment once.
    ///
    /// With `forward_check`, a child whose assignment empties a neighbor
    /// domain is discarded immediately. Without it, the empty domain is kept
    /// and the branch dies when that slot is chosen.
    Plain {
        /// Whether propagation is strict.
        forward_check: bool,
    },
    /// Propagate strictly, then keep assigning slots whose domain shrank to
    /// a single word until none is left.
    ArcConsistent,
}

impl Propagation {
    /// Returns the strictness used when propagating an assignment.
    #[must_use]
    pub const fn strictness(self) -> Strictness {
        match self {
            Self::Plain {
                forward_check: false,
            } => Strictness::Lenient,
            Self::Plain {
                forward_check: true,
            }
            | Self::ArcConsistent => Strictness::Strict,
        }
    }
}

/// A node of the search tree.
///
/// A node records the assignment that produced it, a link to its parent and
/// the domains left after propagation. Nodes are immutable and cheap to
/// clone; children share their ancestors.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use crossfill_core::{SlotTopology, WordSource};
/// use crossfill_solver::{Assignment, Propagation, SearchNode};
///
/// let topology: Arc<SlotTopology> = Arc::new("0 0 3 A 1 -1 3 D".parse()?);
/// let words: WordSource = ["cat", "dog"].into_iter().collect();
/// let root = SearchNode::root(
///     Arc::clone(&topology),
///     &words,
///     Propagation::Plain { forward_check: true },
/// );
///
/// let (slot, _) = topology.slots().next().unwrap();
/// let word = root.domain(slot).unwrap()[0].clone();
/// let child = root.expand(Assignment::new(&topology, slot, word)?)?;
/// let leaf = child.expand(child.domains().forced_assignment().unwrap())?;
///
/// assert!(leaf.is_solution());
/// assert_eq!(leaf.board_view().to_string(), ".C.\nCAT\n.T.");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct SearchNode(Arc<NodeData>);

struct NodeData {
    assignment: Option<Assignment>,
    parent: Option<SearchNode>,
    domains: DomainModel,
    topology: Arc<SlotTopology>,
    propagation: Propagation,
    depth: usize,
}

impl SearchNode {
    /// Creates the root of a search tree.
    ///
    /// Every slot starts with all words of its length. An
    /// [`ArcConsistent`](Propagation::ArcConsistent) root immediately assigns
    /// slots that have a single candidate. If that turns out to be infeasible,
    /// the returned root has every domain emptied: it offers no candidate, so
    /// the search visits it as a single dead end.
    #[must_use]
    pub fn root(
        topology: Arc<SlotTopology>,
        words: &WordSource,
        propagation: Propagation,
    ) -> Self {
        let domains = DomainModel::new(&topology, words);
        let root = Self::bare(topology, domains, propagation);
        if !propagation.is_arc_consistent() {
            return root;
        }
        let Some(forced) = root.0.domains.forced_assignment() else {
            return root;
        };
        match root.expand(forced) {
            Ok(node) => node,
            Err(err) => {
                debug!("initial single-word slots are infeasible: {err}");
                let mut domains = root.0.domains.clone();
                domains.clear_candidates();
                Self::bare(Arc::clone(&root.0.topology), domains, propagation)
            }
        }
    }

    fn bare(topology: Arc<SlotTopology>, domains: DomainModel, propagation: Propagation) -> Self {
        Self(Arc::new(NodeData {
            assignment: None,
            parent: None,
            domains,
            topology,
            propagation,
            depth: 0,
        }))
    }

    fn child(parent: Self, assignment: Assignment, domains: DomainModel) -> Self {
        let data = NodeData {
            depth: parent.0.depth + 1,
            topology: Arc::clone(&parent.0.topology),
            propagation: parent.0.propagation,
            assignment: Some(assignment),
            parent: Some(parent),
            domains,
        };
        Self(Arc::new(data))
    }

    /// Builds the child reached by `assignment`.
    ///
    /// For [`ArcConsistent`](Propagation::ArcConsistent) trees, every slot
    /// forced to a single word afterwards is assigned too, each as its own
    /// node in the chain; the deepest one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDomain`] if strict propagation leaves some slot without
    /// candidates.
    ///
    /// # Panics
    ///
    /// Panics if the assigned slot is already assigned in this node.
    pub fn expand(&self, assignment: Assignment) -> Result<Self, EmptyDomain> {
        let topology = &self.0.topology;
        let propagation = self.0.propagation;
        let mut domains = self.0.domains.clone();
        domains.propagate(topology, &assignment, propagation.strictness())?;

        let mut parent = self.clone();
        let mut assignment = assignment;
        if propagation.is_arc_consistent() {
            while let Some(forced) = domains.forced_assignment() {
                debug!("forced {forced} after {assignment}");
                let intermediate = domains.clone();
                domains.propagate(topology, &forced, Strictness::Strict)?;
                parent = Self::child(parent, assignment, intermediate);
                assignment = forced;
            }
        }
        Ok(Self::child(parent, assignment, domains))
    }

    /// Returns `true` if every slot is assigned.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.0.domains.is_complete()
    }

    /// Returns the assignment that produced this node, or `None` for a root.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.0.assignment.as_ref()
    }

    /// Returns the parent node, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<&SearchNode> {
        self.0.parent.as_ref()
    }

    /// Returns the number of assignments from the root to this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    /// Returns the puzzle layout.
    #[must_use]
    pub fn topology(&self) -> &SlotTopology {
        &self.0.topology
    }

    /// Returns the propagation mode of the tree.
    #[must_use]
    pub fn propagation(&self) -> Propagation {
        self.0.propagation
    }

    /// Returns the domains left at this node.
    #[must_use]
    pub fn domains(&self) -> &DomainModel {
        &self.0.domains
    }

    /// Returns the candidates of an unassigned slot.
    #[must_use]
    pub fn domain(&self, slot: SlotId) -> Option<&[Word]> {
        self.0.domains.domain(slot)
    }

    /// Returns the unassigned slots in canonical order.
    pub fn unassigned_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.0.domains.unassigned_slots()
    }

    /// Returns this node followed by its ancestors up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &SearchNode> {
        iter::successors(Some(self), |node| node.parent())
    }

    /// Returns the assignments from the root down to this node.
    #[must_use]
    pub fn assignment_chain(&self) -> Vec<Assignment> {
        let mut chain: Vec<_> = self
            .ancestors()
            .filter_map(|node| node.assignment().cloned())
            .collect();
        chain.reverse();
        chain
    }

    /// Returns the word assigned to `slot` on the path to this node.
    #[must_use]
    pub fn assigned_word(&self, slot: SlotId) -> Option<&Word> {
        self.ancestors()
            .filter_map(SearchNode::assignment)
            .find(|assignment| assignment.slot() == slot)
            .map(Assignment::word)
    }

    /// Renders the assignments on the path to this node.
    #[must_use]
    pub fn board_view(&self) -> Board {
        let topology = self.topology();
        let mut board = Board::new(topology.width(), topology.height());
        for assignment in self.ancestors().filter_map(SearchNode::assignment) {
            board.fill(topology.slot(assignment.slot()), assignment.word());
        }
        board
    }
}

impl fmt::Debug for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("assignment", &self.0.assignment)
            .field("depth", &self.0.depth)
            .field("unassigned", &self.0.domains.unassigned_count())
            .field("propagation", &self.0.propagation)
            .finish_non_exhaustive()
    }
}
