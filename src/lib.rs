//! Classic in-memory sorting of integer buffers: heap sort over a bounded binary min-heap,
//! quicksort with Lomuto partitioning, and selection sort. The `driver` module wraps each of them
//! in a small console program.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod min_heap;
pub mod quick_sort;
pub mod selection_sort;
pub mod util;

pub use error::{Result, SortError};
pub use min_heap::{heap_sort, BoundedMinHeap, HeapRow};
pub use quick_sort::{partition, quick_sort, quick_sort_range};
pub use selection_sort::selection_sort;
