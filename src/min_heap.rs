use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{Result, SortError};

/// Position of the root. Slot 0 of the storage buffer is never read.
const ROOT: usize = 1;

#[inline]
fn parent(position: usize) -> usize {
    position / 2
}

#[inline]
fn left_child(position: usize) -> usize {
    2 * position
}

#[inline]
fn right_child(position: usize) -> usize {
    2 * position + 1
}

/// A binary min-heap of integers over a buffer whose capacity is fixed at construction time.
/// Positions are 1-based: the root lives at position 1, and a node at position `p` has its
/// children at `2p` and `2p + 1`. The heap never grows past its capacity; inserting into a full
/// heap is reported as an error instead.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap {
    storage: Vec<i32>,
    capacity: usize,
    size: usize,
}

/// One row of the diagnostic view of a heap: a non-leaf node and its children. The right child
/// is absent when the last non-leaf node only has a left child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapRow {
    pub parent: i32,
    pub left: i32,
    pub right: Option<i32>,
}

impl BoundedMinHeap {
    /// Create an empty heap that can hold up to `capacity` elements.
    ///
    /// # Panics
    /// If the buffer cannot be allocated. Use [`BoundedMinHeap::try_new`] for capacities that
    /// come from outside the program.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity + 1],
            capacity,
            size: 0,
        }
    }

    /// Create an empty heap that can hold up to `capacity` elements, reporting a capacity that
    /// cannot be allocated instead of aborting.
    ///
    /// # Errors
    /// [`SortError::AllocationFailed`] if `capacity + 1` slots overflow or cannot be reserved.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let slots = capacity
            .checked_add(1)
            .ok_or(SortError::AllocationFailed { capacity })?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(slots)
            .map_err(|_| SortError::AllocationFailed { capacity })?;
        storage.resize(slots, 0);

        Ok(Self {
            storage,
            capacity,
            size: 0,
        })
    }

    /// Create a full heap holding `values` in the given order. The heap invariant is not
    /// established, call [`BoundedMinHeap::build_heap`] before extracting.
    pub fn from_unordered(values: &[i32]) -> Self {
        let mut storage = Vec::with_capacity(values.len() + 1);
        storage.push(0);
        storage.extend_from_slice(values);

        Self {
            storage,
            capacity: values.len(),
            size: values.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maximum number of elements, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// The smallest element, if the heap invariant holds and the heap is not empty.
    pub fn peek(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage[ROOT])
        }
    }

    /// The logical contents of the heap in storage order, root first.
    pub fn as_slice(&self) -> &[i32] {
        &self.storage[ROOT..=self.size]
    }

    /// Whether `position` has at least one child given the current size.
    fn is_internal(&self, position: usize) -> bool {
        (ROOT..=self.size / 2).contains(&position)
    }

    /// Insert a value and bubble it up until its parent is no greater than itself.
    ///
    /// # Errors
    /// [`SortError::CapacityExceeded`] if the heap is full. The heap is left unchanged.
    pub fn insert(&mut self, value: i32) -> Result<()> {
        if self.is_full() {
            warn!(capacity = self.capacity, value, "refusing insert into full heap");
            return Err(SortError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.size += 1;
        self.storage[self.size] = value;

        let mut current = self.size;
        while current > ROOT && self.storage[current] < self.storage[parent(current)] {
            self.storage.swap(current, parent(current));
            current = parent(current);
        }

        Ok(())
    }

    /// Append values behind the current contents without restoring the heap invariant. Used to
    /// bulk load a heap that is then fixed up with a single [`BoundedMinHeap::build_heap`] pass.
    ///
    /// # Errors
    /// [`SortError::CapacityExceeded`] if not all values fit. Nothing is appended in that case.
    pub fn load(&mut self, values: &[i32]) -> Result<()> {
        if values.len() > self.capacity - self.size {
            warn!(
                capacity = self.capacity,
                size = self.size,
                requested = values.len(),
                "refusing bulk load past capacity"
            );
            return Err(SortError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let start = self.size + 1;
        self.storage[start..start + values.len()].copy_from_slice(values);
        self.size += values.len();

        Ok(())
    }

    /// Restore the heap invariant over the whole buffer. Non-leaf positions are sifted down in
    /// decreasing order, so both subtrees of a position are valid heaps by the time it is
    /// visited.
    pub fn build_heap(&mut self) {
        debug!(size = self.size, "building heap");
        for position in (ROOT..=self.size / 2).rev() {
            self.heapify(position);
        }
    }

    /// Sift the value at `position` down, swapping it with its smaller child until neither child
    /// is smaller. On equal children the right one is taken. Positions without children are
    /// left alone.
    pub fn heapify(&mut self, position: usize) {
        let mut current = position;

        while self.is_internal(current) {
            let left = left_child(current);
            let right = right_child(current);

            // an internal node always has a left child
            let smallest = if right <= self.size && self.storage[right] <= self.storage[left] {
                right
            } else {
                left
            };

            if self.storage[current] <= self.storage[smallest] {
                break;
            }

            self.storage.swap(current, smallest);
            current = smallest;
        }
    }

    /// Remove and return the root. The last element takes its place and is sifted down.
    ///
    /// # Errors
    /// [`SortError::EmptyExtraction`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<i32> {
        if self.is_empty() {
            return Err(SortError::EmptyExtraction);
        }

        let min = self.storage[ROOT];
        self.storage[ROOT] = self.storage[self.size];
        self.size -= 1;
        self.heapify(ROOT);

        trace!(min, size = self.size, "extracted minimum");
        Ok(min)
    }

    /// Every non-leaf node together with its children, in position order.
    pub fn display(&self) -> Vec<HeapRow> {
        (ROOT..=self.size / 2)
            .map(|position| HeapRow {
                parent: self.storage[position],
                left: self.storage[left_child(position)],
                right: (right_child(position) <= self.size)
                    .then(|| self.storage[right_child(position)]),
            })
            .collect()
    }

    /// Check the heap invariant for every parent/child pair within the current size.
    pub fn is_heap(&self) -> bool {
        (ROOT + 1..=self.size).all(|child| self.storage[parent(child)] <= self.storage[child])
    }
}

impl fmt::Display for HeapRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.right {
            Some(right) => write!(f, " {}\t\t{}\t\t{}", self.parent, self.left, right),
            None => write!(f, " {}\t\t{}\t\t-", self.parent, self.left),
        }
    }
}

impl fmt::Display for BoundedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PARENT NODE\tLEFT CHILD NODE\tRIGHT CHILD NODE")?;
        for row in self.display() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Sort a set of integers by bulk loading them into a heap and draining it.
///
/// # Returns
/// A vector containing the input values in ascending order
pub fn heap_sort(values: &[i32]) -> Vec<i32> {
    let mut heap = BoundedMinHeap::from_unordered(values);
    heap.build_heap();
    debug!(len = values.len(), "draining heap");

    std::iter::from_fn(|| heap.extract_min().ok()).collect()
}
