use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::{Error, Result};

/// Comparator used when a container is built with [`PriorityContainer::new`]
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap ordered by a caller-supplied comparator
///
/// The backing vector is an implicit complete binary tree: the root lives at
/// index 0 and the children of index `i` at `2i + 1` and `2i + 2`. The
/// comparator decides priority: `compare(a, b) == Ordering::Less` means `a`
/// leaves the container before `b`.
///
/// After every public operation, no element compares greater than either of
/// its children.
///
/// Elements that compare `Equal` come out in an unspecified order. The
/// container is not stable and callers that need FIFO behaviour among ties
/// must fold a sequence number into the comparator.
pub struct PriorityContainer<T, F = NaturalOrder<T>> {
    heap: Vec<T>,
    compare: F,
}

impl<T: Ord> PriorityContainer<T> {
    /// Creates an empty container ordered ascending by `Ord`
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty ascending container with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityContainer {
            heap: Vec::with_capacity(capacity),
            compare: |a: &T, b: &T| a.cmp(b),
        }
    }
}

impl<T: Ord> Default for PriorityContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> PriorityContainer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty container ordered by `compare`
    pub fn with_comparator(compare: F) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    /// Creates an empty container ordered by `compare` with preallocated storage
    pub fn with_capacity_and_comparator(capacity: usize, compare: F) -> Self {
        PriorityContainer {
            heap: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the number of elements in the container
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the container holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyContainer)
    }

    /// Adds an element, restoring heap order by sifting it up
    pub fn insert(&mut self, element: T) {
        self.heap.push(element);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the highest-priority element
    pub fn extract_min(&mut self) -> Result<T> {
        let last = self.heap.pop().ok_or(Error::EmptyContainer)?;
        if self.heap.is_empty() {
            return Ok(last);
        }

        let min = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Ok(min)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Read-only view of the backing tree in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Drains the container in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(element) = self.extract_min() {
            sorted.push(element);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = parent(index);
            if (self.compare)(&self.heap[index], &self.heap[parent_index]) != Ordering::Less {
                break;
            }
            self.heap.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            // Pick the child that should surface first
            let right = right_child(index);
            let mut smaller = left;
            if right < len && (self.compare)(&self.heap[right], &self.heap[left]) == Ordering::Less {
                smaller = right;
            }

            if (self.compare)(&self.heap[smaller], &self.heap[index]) != Ordering::Less {
                break;
            }
            self.heap.swap(index, smaller);
            index = smaller;
        }
    }
}

impl<T, F> Extend<T> for PriorityContainer<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Debug, F> Debug for PriorityContainer<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityContainer")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_arithmetic() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn single_element_extract_leaves_container_empty() {
        let mut pq = PriorityContainer::new();
        pq.insert(7);
        assert_eq!(pq.extract_min().unwrap(), 7);
        assert!(pq.is_empty());
        assert!(matches!(pq.extract_min(), Err(Error::EmptyContainer)));
    }
}
