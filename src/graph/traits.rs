use std::fmt::Debug;

use crate::data_structures::SortedSet;
use crate::Result;

/// Capabilities a value needs to act as a graph vertex
///
/// Vertices have no identity beyond their value: two equal vertices are the
/// same vertex. Ordering keeps adjacency sets sorted.
pub trait Vertex: Copy + Ord + Debug {
    /// Upper bound on the number of vertices a plausible path can contain.
    ///
    /// Path reconstruction never walks more parent links than this.
    fn max_path_len(&self) -> usize;
}

macro_rules! impl_unbounded_vertex {
    ($($t:ty),*) => {
        $(
            impl Vertex for $t {
                fn max_path_len(&self) -> usize {
                    usize::MAX
                }
            }
        )*
    };
}

impl_unbounded_vertex!(u8, u16, u32, u64, usize, i32, i64, char);

/// Read-only view of a directed, unweighted graph laid out in slots
pub trait Graph<V: Vertex>: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the number of occupied slots; slot indices run `0..slot_count()`
    fn slot_count(&self) -> usize;

    /// Returns the slot holding `vertex`, if it is in the graph
    fn slot_of(&self, vertex: &V) -> Option<usize>;

    /// Returns the vertex stored in `slot`
    fn vertex_at(&self, slot: usize) -> Option<V>;

    /// Returns the destination set of the vertex in `slot`, empty if it has
    /// no out-edges; `None` when the slot is out of range
    fn edges_at(&self, slot: usize) -> Option<&SortedSet<V>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool {
        self.slot_of(vertex).is_some()
    }

    /// Returns true if there's an edge from `from` to `to`
    fn is_edge(&self, from: &V, to: &V) -> bool {
        self.slot_of(from)
            .and_then(|slot| self.edges_at(slot))
            .map_or(false, |destinations| destinations.contains(to))
    }
}

/// Mutating operations used while loading a graph
pub trait MutableGraph<V: Vertex>: Graph<V> {
    /// Registers `vertex` without any out-edges; a no-op if already present
    fn add_vertex(&mut self, vertex: V) -> Result<usize>;

    /// Ensures the edge `from -> to` exists
    fn add(&mut self, from: V, to: V) -> Result<()>;

    /// Replaces the destination set of `from` with a copy of `destinations`
    fn add_set(&mut self, from: V, destinations: &SortedSet<V>) -> Result<()>;

    /// Releases every slot
    fn clear(&mut self);
}
