/*!
Breadth-first traversal.

The search yields `(predecessor, node)` pairs, where the predecessor is `None` for the
node the search (re)started at. After the iterator is exhausted, the search can be
restarted at an unvisited node to cover all connected components.
*/

use std::collections::VecDeque;

use super::*;

/// Item yielded by [`BFS`]: the visited node and its parent in the BFS tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Parent of `node` in the traversal tree (if any)
    pub predecessor: Option<Node>,
    /// The node currently visited
    pub node: Node,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    num_visited: usize,
    queue: VecDeque<Visit>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` is not a vertex of `graph`, the search starts exhausted.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut bfs = Self {
            graph,
            visited: vec![false; graph.len()],
            num_visited: 0,
            queue: VecDeque::new(),
        };

        if graph.has_vertex(start) {
            bfs.enqueue_root(start);
        }

        bfs
    }

    fn enqueue_root(&mut self, u: Node) {
        self.visited[u as usize] = true;
        self.num_visited += 1;
        self.queue.push_back(Visit {
            predecessor: None,
            node: u,
        });
    }

    /// Returns *true* if `u` was already discovered by the search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.visited[u as usize]) {
            None => false,
            Some(u) => {
                self.enqueue_root(u);
                true
            }
        }
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.node;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.num_visited += 1;
                self.queue.push_back(Visit {
                    predecessor: Some(u),
                    node: v,
                });
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.num_visited),
        )
    }
}

/// Traversal algorithms exposed as methods on the graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [Edge(0, 1), Edge(1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).map(|x| x.node).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order_and_predecessors() {
        let g = AdjArrayUndir::from_edges(5, [Edge(0, 1), Edge(0, 2), Edge(2, 3)]);

        let visits = g.bfs(0).collect_vec();
        assert_eq!(visits.iter().map(|x| x.node).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(visits[0].predecessor, None);
        assert_eq!(visits[3].predecessor, Some(2));
    }

    #[test]
    fn bfs_restart() {
        let g = AdjArrayUndir::from_edges(5, [Edge(0, 1), Edge(3, 4)]);

        let mut bfs = g.bfs(0);
        assert_eq!(bfs.by_ref().count(), 2);
        assert!(!bfs.did_visit_node(2));

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().map(|x| x.node).collect_vec(), vec![2]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().count(), 2);
        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn bfs_on_empty_graph() {
        let g = AdjArrayUndir::default();
        let mut bfs = g.bfs(0);
        assert!(bfs.next().is_none());
        assert!(!bfs.try_restart_at_unvisited());
    }
}
