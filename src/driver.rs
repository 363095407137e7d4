use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::util::TryInitError;

use crate::error::SortError;
use crate::min_heap::BoundedMinHeap;
use crate::quick_sort::quick_sort_range;
use crate::selection_sort::selection_sort;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected an integer, found {0:?}")]
    MalformedInput(String),
    #[error("input ended before all values were read")]
    UnexpectedEof,
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] TryInitError),
}

/// Reads whitespace separated tokens from an input, one line at a time.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_value<T: FromStr>(&mut self) -> Result<T, DriverError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DriverError::UnexpectedEof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }

        let token = self.pending.pop_front().ok_or(DriverError::UnexpectedEof)?;
        token
            .parse()
            .map_err(|_| DriverError::MalformedInput(token))
    }
}

/// Interactive heap driver. Prompts for the capacity unless one is given, reads that many
/// integers, then prints the heap before and after removing its root.
pub fn run_heap<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    capacity: Option<usize>,
) -> Result<(), DriverError> {
    let mut reader = TokenReader::new(input);

    let capacity = match capacity {
        Some(capacity) => capacity,
        None => {
            writeln!(output, "Enter the size of Min Heap")?;
            output.flush()?;
            reader.next_value()?
        }
    };
    info!(capacity, "reading heap elements");

    let mut heap = BoundedMinHeap::try_new(capacity)?;
    for i in 1..=capacity {
        write!(output, "Enter {} element: ", i)?;
        output.flush()?;
        heap.insert(reader.next_value()?)?;
    }

    print_heap(output, heap)
}

/// Heap driver for values that are already known.
pub fn run_heap_with_values<W: Write>(output: &mut W, values: &[i32]) -> Result<(), DriverError> {
    info!(capacity = values.len(), "inserting heap elements");

    let mut heap = BoundedMinHeap::new(values.len());
    for n in values {
        heap.insert(*n)?;
    }

    print_heap(output, heap)
}

fn print_heap<W: Write>(output: &mut W, mut heap: BoundedMinHeap) -> Result<(), DriverError> {
    heap.build_heap();
    writeln!(output, "The Min Heap is ")?;
    write!(output, "{}", heap)?;

    let min = heap.extract_min()?;
    writeln!(
        output,
        "After removing the minimum element(Root Node) {}, Min heap is:",
        min
    )?;
    write!(output, "{}", heap)?;

    Ok(())
}

/// Print an array, sort the whole of it with quicksort, print it again.
pub fn run_quick_sort<W: Write>(output: &mut W, mut data: Vec<i32>) -> Result<(), DriverError> {
    print_array(output, "The Original Unsorted Array: ", &data)?;

    info!(len = data.len(), "running quicksort");
    if let Some(high) = data.len().checked_sub(1) {
        quick_sort_range(&mut data, 0, high)?;
    }

    print_array(output, "Sorted Array By the Quick Sort: ", &data)
}

/// Print an array, sort it with selection sort, print it again.
pub fn run_selection_sort<W: Write>(output: &mut W, mut data: Vec<i32>) -> Result<(), DriverError> {
    print_array(output, "The Original Unsorted Array: ", &data)?;

    info!(len = data.len(), "running selection sort");
    selection_sort(&mut data);

    print_array(output, "Sorted Array By the Selection Sort: ", &data)
}

fn print_array<W: Write>(output: &mut W, title: &str, data: &[i32]) -> Result<(), DriverError> {
    writeln!(output, "{}", title)?;
    writeln!(output, "{:?}", data)?;
    Ok(())
}
