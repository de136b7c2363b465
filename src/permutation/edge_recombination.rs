//! # Edge recombination
//!
//! Crossover for tours. Both parents are read as cycles, so a permutation of
//! `n` nodes contributes `n` undirected edges, wrap-around included. The child
//! is assembled from those edges in four passes:
//!
//! 1. Edges present in both parents are committed unconditionally.
//! 2. The remaining edges of each parent are shuffled and the two lists are
//!    scanned alternately. An edge is committed when both endpoints still have
//!    a free slot and the endpoints lie in different components, so no
//!    sub-cycle is ever closed.
//! 3. Whatever is left is a set of paths. Their free endpoints are stitched
//!    together in node order with a stack, again never joining a component
//!    to itself.
//! 4. The two ends of the resulting Hamiltonian path are joined.
//!
//! The committed edges are finally walked from node `0` to produce the child.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::breeding::Breeder;
use crate::permutation::{DisjointSet, Permutation};

/// An undirected edge, stored as `(min, max)`.
type Edge = (usize, usize);

/// Edge recombination crossover for permutation genomes.
///
/// # Examples
///
/// ```rust
/// use genetics::permutation::{is_permutation, EdgeRecombination};
/// use genetics::rng::RandomNumberGenerator;
///
/// let mut crossover = EdgeRecombination::new(RandomNumberGenerator::from_seed(17));
/// let child = crossover.recombine(&[0, 1, 2, 3, 4, 5], &[3, 5, 1, 0, 4, 2]);
/// assert!(is_permutation(&child));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeRecombination<R> {
    rng: R,
}

impl<R: Rng> EdgeRecombination<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a child tour from two parent tours over the same nodes.
    ///
    /// Both parents must be permutations of `0..n`. A single-node parent is
    /// returned as is.
    ///
    /// # Arguments
    ///
    /// * `lhs` - The first parent tour.
    /// * `rhs` - The second parent tour, of the same length.
    ///
    /// # Returns
    ///
    /// A new tour over the same nodes, starting at node `0`, that keeps every
    /// edge the parents share.
    ///
    /// # Panics
    ///
    /// Panics if the parents are empty or differ in length.
    pub fn recombine(&mut self, lhs: &[usize], rhs: &[usize]) -> Permutation {
        assert_eq!(lhs.len(), rhs.len(), "Parents must have the same length");
        assert!(!lhs.is_empty(), "Parents must not be empty");
        debug_assert!(super::is_permutation(lhs) && super::is_permutation(rhs));

        let size = lhs.len();
        if size == 1 {
            return lhs.to_vec();
        }

        let (common, mut lhs_only, mut rhs_only) = split_edges(cycle_edges(lhs), cycle_edges(rhs));
        let mut tour = Tour::new(size);
        for (a, b) in common {
            tour.commit(a, b);
        }

        lhs_only.shuffle(&mut self.rng);
        rhs_only.shuffle(&mut self.rng);
        tour.scan_alternately([&lhs_only[..], &rhs_only[..]]);
        tour.stitch();

        debug_assert_eq!(tour.edges.len(), size);
        tour.into_permutation()
    }
}

impl<R: Rng> Breeder<Permutation> for EdgeRecombination<R> {
    fn breed(&mut self, father: &Permutation, mother: &Permutation) -> Permutation {
        self.recombine(father, mother)
    }
}

/// The `n` normalised edges of `nodes` read as a cycle, sorted.
fn cycle_edges(nodes: &[usize]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = nodes
        .iter()
        .zip(nodes.iter().cycle().skip(1))
        .map(|(&a, &b)| (a.min(b), a.max(b)))
        .collect();
    edges.sort_unstable();
    edges
}

/// Splits two sorted edge multisets into (both, only lhs, only rhs).
fn split_edges(lhs: Vec<Edge>, rhs: Vec<Edge>) -> (Vec<Edge>, Vec<Edge>, Vec<Edge>) {
    let mut common = Vec::new();
    let mut lhs_only = Vec::new();
    let mut rhs_only = Vec::new();

    let mut lhs = lhs.into_iter().peekable();
    let mut rhs = rhs.into_iter().peekable();
    loop {
        match (lhs.peek().copied(), rhs.peek().copied()) {
            (Some(a), Some(b)) if a == b => {
                common.push(a);
                lhs.next();
                rhs.next();
            }
            (Some(a), Some(b)) if a < b => lhs_only.extend(lhs.next()),
            (Some(_), Some(_)) => rhs_only.extend(rhs.next()),
            (Some(_), None) => lhs_only.extend(lhs.next()),
            (None, Some(_)) => rhs_only.extend(rhs.next()),
            (None, None) => break,
        }
    }

    (common, lhs_only, rhs_only)
}

/// A partially assembled tour.
struct Tour {
    edges: Vec<Edge>,
    free_slots: Vec<u8>,
    components: DisjointSet,
}

impl Tour {
    fn new(size: usize) -> Self {
        Self {
            edges: Vec::with_capacity(size),
            free_slots: vec![2; size],
            components: DisjointSet::new(size),
        }
    }

    fn commit(&mut self, a: usize, b: usize) {
        self.edges.push((a, b));
        self.free_slots[a] -= 1;
        self.free_slots[b] -= 1;
        self.components.merge(a, b);
    }

    fn can_join(&mut self, a: usize, b: usize) -> bool {
        self.free_slots[a] > 0 && self.free_slots[b] > 0 && !self.components.connected(a, b)
    }

    /// Takes turns committing the next joinable edge of each list until
    /// neither list has one left.
    fn scan_alternately(&mut self, lists: [&[Edge]; 2]) {
        let mut cursors = [0; 2];

        while cursors.iter().zip(lists).any(|(&cursor, list)| cursor < list.len()) {
            for (cursor, list) in cursors.iter_mut().zip(lists) {
                let rest = &list[*cursor..];
                match rest.iter().position(|&(a, b)| self.can_join(a, b)) {
                    Some(offset) => {
                        let (a, b) = rest[offset];
                        self.commit(a, b);
                        *cursor += offset + 1;
                    }
                    None => *cursor = list.len(),
                }
            }
        }
    }

    /// Joins the remaining paths into one cycle.
    ///
    /// Every node on the stack belongs to the same component, so a node from
    /// any other component can be joined to the top.
    fn stitch(&mut self) {
        let mut stack: Vec<usize> = Vec::new();

        for node in 0..self.free_slots.len() {
            for _ in 0..self.free_slots[node] {
                match stack.last() {
                    Some(&top) if !self.components.connected(top, node) => {
                        self.commit(top, node);
                        stack.pop();
                    }
                    _ => stack.push(node),
                }
            }
        }

        if let (Some(a), Some(b)) = (stack.pop(), stack.pop()) {
            self.commit(b, a);
        }
    }

    /// Walks the cycle starting from node `0`.
    fn into_permutation(self) -> Permutation {
        let size = self.free_slots.len();
        let mut neighbours = vec![Vec::with_capacity(2); size];
        for &(a, b) in &self.edges {
            neighbours[a].push(b);
            neighbours[b].push(a);
        }

        let mut permutation = Vec::with_capacity(size);
        let (mut previous, mut current) = (0, 0);
        permutation.push(current);
        while permutation.len() < size {
            let next = if neighbours[current][0] == previous {
                neighbours[current][1]
            } else {
                neighbours[current][0]
            };
            previous = current;
            current = next;
            permutation.push(current);
        }

        permutation
    }
}
