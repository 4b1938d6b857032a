use core::iter::{Enumerate, StepBy};
use core::ops::Range;
use core::slice;

use crate::graph::types::{is_present, DirectedEdge, NodeId};

/// Iterator over the nodes of a dense graph in ID order.
#[derive(Debug, Clone)]
pub struct DenseNodes {
    pub(super) range: Range<usize>,
}

impl Iterator for DenseNodes {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.range.next().map(NodeId::from_index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for DenseNodes {}

/// Iterator over the non-sentinel cells of one matrix row or column.
///
/// Yields the index of each present cell as a node.
#[derive(Debug, Clone)]
pub struct DenseNeighbors<I> {
    pub(super) cells: Enumerate<I>,
}

impl<'a, I> Iterator for DenseNeighbors<I>
where
    I: Iterator<Item = &'a f64>,
{
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.cells
            .find(|&(_, &cost)| is_present(cost))
            .map(|(i, _)| NodeId::from_index(i))
    }
}

/// Successors of a node: a scan along its matrix row.
pub type DenseSuccessors<'a> = DenseNeighbors<slice::Iter<'a, f64>>;

/// Predecessors of a node: a strided scan down its matrix column.
pub type DensePredecessors<'a> = DenseNeighbors<StepBy<slice::Iter<'a, f64>>>;

/// Row-major iterator over every edge of a dense graph.
#[derive(Debug, Clone)]
pub struct DenseEdges<'a> {
    pub(super) cells: &'a [f64],
    pub(super) order: usize,
    pub(super) index: usize,
}

impl<'a> Iterator for DenseEdges<'a> {
    type Item = DirectedEdge;

    fn next(&mut self) -> Option<DirectedEdge> {
        while self.index < self.cells.len() {
            let i = self.index;
            self.index += 1;
            if is_present(self.cells[i]) {
                return Some(DirectedEdge::new(
                    NodeId::from_index(i / self.order),
                    NodeId::from_index(i % self.order),
                ));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells.len() - self.index))
    }
}
