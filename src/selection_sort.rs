/// Sort a slice in place by repeatedly swapping the minimum of the unsorted suffix to its front.
/// Performs a quadratic number of comparisons regardless of input order, but at most `n - 1`
/// swaps. Ties resolve to the earliest index, which does not make the sort stable.
pub fn selection_sort(data: &mut [i32]) {
    let len = data.len();

    for x in 0..len.saturating_sub(1) {
        let mut minimum = x;
        for y in x + 1..len {
            if data[y] < data[minimum] {
                minimum = y;
            }
        }

        if minimum != x {
            data.swap(minimum, x);
        }
    }
}
