use crate::error::{Result, SortError};

/// Lomuto partition around the last element of the slice. Every element no greater than the pivot
/// is moved in front of it.
///
/// # Returns
/// The final index of the pivot within `data`
///
/// # Panics
/// If `data` is empty.
pub fn partition(data: &mut [i32]) -> usize {
    assert!(!data.is_empty(), "cannot partition an empty slice");

    let high = data.len() - 1;
    let pivot = data[high];

    // everything before `boundary` is <= pivot
    let mut boundary = 0;
    for j in 0..high {
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    boundary
}

/// Sort a slice in place with quicksort, using the last element of each range as the pivot.
/// Not stable. Already sorted input degrades to quadratic time. Only the smaller side of each
/// partition is sorted recursively, so the recursion depth stays logarithmic.
pub fn quick_sort(mut data: &mut [i32]) {
    while data.len() >= 2 {
        let pivot = partition(data);
        let (lower, upper) = std::mem::take(&mut data).split_at_mut(pivot);
        let upper = &mut upper[1..];

        if lower.len() < upper.len() {
            quick_sort(lower);
            data = upper;
        } else {
            quick_sort(upper);
            data = lower;
        }
    }
}

/// Sort the inclusive index range `[low, high]` of `data` in place, leaving the rest of the
/// buffer untouched. A range with `low > high` is empty and nothing happens.
///
/// # Parameters
/// - `data` buffer containing the range
/// - `low` first index of the range
/// - `high` last index of the range, must be within `data`
///
/// # Errors
/// [`SortError::RangeOutOfBounds`] if `high` is not a valid index of `data` (only checked for
/// non-empty ranges).
pub fn quick_sort_range(data: &mut [i32], low: usize, high: usize) -> Result<()> {
    if low > high {
        return Ok(());
    }

    if high >= data.len() {
        return Err(SortError::RangeOutOfBounds {
            high,
            len: data.len(),
        });
    }

    quick_sort(&mut data[low..=high]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{partition, quick_sort, quick_sort_range};
    use crate::error::SortError;
    use rand::distributions::Uniform;
    use rand::{thread_rng, Rng};

    #[test]
    fn test_quick_sort_range() {
        let mut data = [6, 2, 1, 45, 23, 19, 63, 5, 43, 50];
        quick_sort_range(&mut data, 0, 9).unwrap();
        assert_eq!([1, 2, 5, 6, 19, 23, 43, 45, 50, 63], data);
    }

    #[test]
    fn test_partial_range() {
        let mut data = [9, 8, 7, 3, 1, 2, 0];
        quick_sort_range(&mut data, 2, 5).unwrap();
        assert_eq!([9, 8, 1, 2, 3, 7, 0], data);
    }

    #[test]
    fn test_empty_and_single_ranges() {
        let mut data = [3, 2, 1];
        quick_sort_range(&mut data, 2, 1).unwrap();
        quick_sort_range(&mut data, 1, 1).unwrap();
        assert_eq!([3, 2, 1], data);

        let mut empty: [i32; 0] = [];
        quick_sort_range(&mut empty, 1, 0).unwrap();
    }

    #[test]
    fn test_range_out_of_bounds() {
        let mut data = [3, 2, 1];
        assert_eq!(
            Err(SortError::RangeOutOfBounds { high: 3, len: 3 }),
            quick_sort_range(&mut data, 0, 3)
        );
        assert_eq!(
            Err(SortError::RangeOutOfBounds { high: 5, len: 3 }),
            quick_sort_range(&mut data, 5, 5)
        );
        assert_eq!([3, 2, 1], data);
    }

    #[test]
    fn test_partition() {
        let mut data = [7, 2, 9, 4, 1, 5];
        let pivot = partition(&mut data);
        assert_eq!(3, pivot);
        assert_eq!(5, data[pivot]);
        assert!(data[..pivot].iter().all(|n| *n <= 5));
        assert!(data[pivot + 1..].iter().all(|n| *n > 5));

        let mut single = [4];
        assert_eq!(0, partition(&mut single));
    }

    #[test]
    fn test_already_sorted() {
        let mut data: Vec<i32> = (0..300).collect();
        let expected = data.clone();
        quick_sort(&mut data);
        assert_eq!(expected, data);
    }

    #[test]
    fn test_worst_case_depth() {
        // a linear recursion depth over these inputs would overflow the small stack
        let handle = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let mut sorted: Vec<i32> = (0..10_000).collect();
                quick_sort(&mut sorted);
                assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

                let mut reversed: Vec<i32> = (0..10_000).rev().collect();
                quick_sort(&mut reversed);
                assert_eq!((0..10_000).collect::<Vec<i32>>(), reversed);

                let mut duplicates = vec![7; 10_000];
                quick_sort(&mut duplicates);
                assert!(duplicates.iter().all(|n| *n == 7));
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let mut data = [0, -5, 3, 3, -5, 12, 0, 3];
        quick_sort(&mut data);
        assert_eq!([-5, -5, 0, 0, 3, 3, 3, 12], data);
    }

    #[test]
    fn test_random_permutation() {
        let mut rng = thread_rng();
        let uniform = Uniform::from(-50..50);
        let mut data: Vec<i32> = (0..1000).map(|_| rng.sample(&uniform)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        quick_sort(&mut data);
        assert_eq!(expected, data);
    }
}
