use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Disjoint sets (union-find) with path compression and union by size.
///
/// Every element keeps the slot it was first added to; slots are never
/// removed. [`DisjointSets::find`] hands out a reference to the representative
/// stored in the structure, so two members of the same subset yield the
/// *same* object (`std::ptr::eq` holds), not merely equal values.
///
/// Path compression runs behind `&self` through interior mutability, which
/// makes the type `!Sync`: mutation and lookup are single-threaded.
#[derive(Debug, Clone)]
pub struct DisjointSets<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Element -> slot index
    lookup: HashMap<T, usize>,

    /// One entry per element ever added
    entries: Vec<Entry<T>>,

    /// Number of disjoint subsets
    subsets: usize,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    element: T,
    parent: Cell<usize>,
    /// Only meaningful at a root
    size: usize,
}

impl<T> DisjointSets<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Creates an empty structure
    pub fn new() -> Self {
        DisjointSets {
            lookup: HashMap::new(),
            entries: Vec::new(),
            subsets: 0,
        }
    }

    /// Creates an empty structure with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        DisjointSets {
            lookup: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            subsets: 0,
        }
    }

    /// Adds `element` as a new singleton subset.
    ///
    /// Returns false, leaving the structure untouched, if it was already present.
    pub fn add(&mut self, element: T) -> bool {
        if self.lookup.contains_key(&element) {
            return false;
        }

        let index = self.entries.len();
        self.lookup.insert(element.clone(), index);
        self.entries.push(Entry {
            element,
            parent: Cell::new(index),
            size: 1,
        });
        self.subsets += 1;
        true
    }

    /// Returns the representative of the subset containing `element`,
    /// or `None` if it was never added
    pub fn find(&self, element: &T) -> Option<&T> {
        let root = self.find_index(element)?;
        self.entries.get(root).map(|entry| &entry.element)
    }

    /// Returns the slot index of the representative of `element`'s subset
    pub fn find_index(&self, element: &T) -> Option<usize> {
        let index = *self.lookup.get(element)?;
        Some(self.find_root(index))
    }

    /// Returns true if both elements are present and share a subset
    pub fn same_subset(&self, first: &T, second: &T) -> bool {
        match (self.find_index(first), self.find_index(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Merges the subsets containing `first` and `second` and returns the
    /// representative of the result.
    ///
    /// The root of the smaller subset is attached under the larger one; on a
    /// tie, `second`'s root goes under `first`'s. Absent elements are not
    /// inserted: with one element missing this returns the other's
    /// representative, with both missing it returns `None`.
    pub fn merge(&mut self, first: &T, second: &T) -> Option<&T> {
        let root = match (self.find_index(first), self.find_index(second)) {
            (Some(a), Some(b)) if a == b => a,
            (Some(a), Some(b)) => self.union_roots(a, b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return None,
        };
        self.entries.get(root).map(|entry| &entry.element)
    }

    /// Number of elements ever added (not the number of subsets)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of disjoint subsets
    pub fn subset_count(&self) -> usize {
        self.subsets
    }

    /// Size of the subset containing `element`
    pub fn subset_size(&self, element: &T) -> Option<usize> {
        let root = self.find_index(element)?;
        self.entries.get(root).map(|entry| entry.size)
    }

    /// Materializes the current partition.
    ///
    /// Subsets appear in order of their first-added member, and members in
    /// insertion order.
    pub fn all_subsets(&self) -> Vec<Vec<&T>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::with_capacity(self.subsets);
        let mut subsets: Vec<Vec<&T>> = Vec::with_capacity(self.subsets);

        for (index, entry) in self.entries.iter().enumerate() {
            let root = self.find_root(index);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                subsets.push(Vec::new());
                subsets.len() - 1
            });
            subsets[slot].push(&entry.element);
        }

        subsets
    }

    /// Walks to the root, then points every slot on the path straight at it
    fn find_root(&self, index: usize) -> usize {
        let mut root = index;
        while let Some(entry) = self.entries.get(root) {
            let parent = entry.parent.get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = index;
        while current != root {
            let Some(entry) = self.entries.get(current) else {
                break;
            };
            current = entry.parent.replace(root);
        }

        root
    }

    /// Attaches one root under the other by size and returns the surviving root
    fn union_roots(&mut self, first: usize, second: usize) -> usize {
        let first_size = self.entries[first].size;
        let second_size = self.entries[second].size;

        let (parent, child) = if second_size > first_size {
            (second, first)
        } else {
            (first, second)
        };

        self.entries[child].parent.set(parent);
        self.entries[parent].size += self.entries[child].size;
        self.subsets -= 1;
        log::trace!("merged slot {} under slot {}", child, parent);
        parent
    }
}

impl<T> Default for DisjointSets<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DisjointSets<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sets = DisjointSets::new();
        for element in iter {
            sets.add(element);
        }
        sets
    }
}
