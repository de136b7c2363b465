/// Union-find over the nodes `0..n`, with path compression and union by rank.
///
/// ```rust
/// use genetics::permutation::DisjointSet;
///
/// let mut components = DisjointSet::new(4);
/// assert!(components.merge(0, 1));
/// assert!(components.merge(2, 3));
/// assert!(!components.merge(1, 0));
/// assert!(components.connected(0, 1));
/// assert!(!components.connected(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
}

impl DisjointSet {
    /// Creates `size` singleton components.
    pub fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            ranks: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the representative of `node`'s component.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = node;
        while self.parents[current] != root {
            current = std::mem::replace(&mut self.parents[current], root);
        }

        root
    }

    /// Joins the components of `lhs` and `rhs`.
    ///
    /// Returns `false` if they were already connected.
    pub fn merge(&mut self, lhs: usize, rhs: usize) -> bool {
        let lhs = self.find(lhs);
        let rhs = self.find(rhs);
        if lhs == rhs {
            return false;
        }

        let (child, root) = if self.ranks[lhs] < self.ranks[rhs] {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        self.parents[child] = root;
        if self.ranks[child] == self.ranks[root] {
            self.ranks[root] += 1;
        }

        true
    }

    pub fn connected(&mut self, lhs: usize, rhs: usize) -> bool {
        self.find(lhs) == self.find(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;
    use rand::Rng;

    #[test]
    fn test_singletons() {
        let mut components = DisjointSet::new(3);
        assert_eq!(components.len(), 3);
        for node in 0..3 {
            assert_eq!(components.find(node), node);
        }
        assert!(!components.connected(0, 2));
    }

    #[test]
    fn test_merge_is_transitive() {
        let mut components = DisjointSet::new(5);
        components.merge(0, 1);
        components.merge(3, 4);
        components.merge(1, 4);

        assert!(components.connected(0, 3));
        assert!(!components.connected(2, 0));
        assert!(!components.merge(0, 4));
    }

    #[test]
    fn test_matches_naive_labelling() {
        let mut rng = RandomNumberGenerator::from_seed(11);

        for _ in 0..50 {
            let size = rng.gen_range(1..40);
            let mut components = DisjointSet::new(size);
            let mut labels: Vec<usize> = (0..size).collect();

            for _ in 0..size {
                let (a, b) = (rng.gen_range(0..size), rng.gen_range(0..size));
                let already_connected = labels[a] == labels[b];
                assert_eq!(components.merge(a, b), !already_connected);

                let (from, to) = (labels[b], labels[a]);
                for label in labels.iter_mut().filter(|label| **label == from) {
                    *label = to;
                }
            }

            for a in 0..size {
                for b in 0..size {
                    assert_eq!(components.connected(a, b), labels[a] == labels[b]);
                }
            }
        }
    }
}
