/// Bounded element copies into a mutable destination slice.
///
/// Plain positional copying — clone each element from the source range
/// into `destination` starting at an offset. For `Copy` element types
/// over full slices, `copy_from_slice` is the cheaper std route; these
/// helpers exist for the offset/range forms and for `Clone`-only
/// element types.
pub trait CopyInto<T> {
    /// Copy every element into `destination`, starting at `index`.
    ///
    /// # Panics
    ///
    /// If `destination` is too short to hold the elements at `index`.
    fn copy_into(&self, destination: &mut [T], index: usize);

    /// Copy `count` elements starting at `source_index` into
    /// `destination` at `destination_index`.
    ///
    /// # Panics
    ///
    /// If `count` exceeds the elements available from `source_index`
    /// to the end of the source, or if the destination range is out of
    /// bounds.
    fn copy_range_into(
        &self,
        source_index: usize,
        destination: &mut [T],
        destination_index: usize,
        count: usize,
    );
}

impl<T: Clone> CopyInto<T> for [T] {
    fn copy_into(&self, destination: &mut [T], index: usize) {
        for (i, item) in self.iter().enumerate() {
            destination[index + i] = item.clone();
        }
    }

    fn copy_range_into(
        &self,
        source_index: usize,
        destination: &mut [T],
        destination_index: usize,
        count: usize,
    ) {
        assert!(
            source_index <= self.len() && count <= self.len() - source_index,
            "count is greater than the number of elements from source_index to the end of the source"
        );

        for i in 0..count {
            destination[destination_index + i] = self[source_index + i].clone();
        }
    }
}

/// Drain an iterator into `destination`, starting at `index`.
///
/// # Panics
///
/// If the iterator yields more elements than `destination` can hold
/// from `index` on.
pub fn copy_from_iter<T, I>(source: I, destination: &mut [T], index: usize)
where
    I: IntoIterator<Item = T>,
{
    let mut at = index;
    for item in source {
        destination[at] = item;
        at += 1;
    }
}
