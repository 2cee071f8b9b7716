//! Row-partitioned loop helpers.
//!
//! Every output row is written by exactly one task, so the per-pixel passes
//! need no locking. With the `parallel` feature rows run on the rayon pool;
//! otherwise they run in order on the calling thread. Results are identical.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Call `op(y, row)` for every `row_len`-sized chunk of `data`.
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], row_len: usize, op: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if row_len == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| op(y, row));
    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| op(y, row));
}

/// Like [`for_each_row_mut`] over two planes of identical layout.
pub(crate) fn for_each_row_pair_mut<A, B, F>(a: &mut [A], b: &mut [B], row_len: usize, op: F)
where
    A: Send,
    B: Send,
    F: Fn(usize, &mut [A], &mut [B]) + Sync + Send,
{
    debug_assert_eq!(a.len(), b.len());
    if row_len == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    a.par_chunks_mut(row_len)
        .zip(b.par_chunks_mut(row_len))
        .enumerate()
        .for_each(|(y, (ra, rb))| op(y, ra, rb));
    #[cfg(not(feature = "parallel"))]
    a.chunks_mut(row_len)
        .zip(b.chunks_mut(row_len))
        .enumerate()
        .for_each(|(y, (ra, rb))| op(y, ra, rb));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_receive_their_own_index() {
        let mut data = vec![0usize; 12];
        for_each_row_mut(&mut data, 4, |y, row| row.fill(y));
        assert_eq!(data, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn zero_length_rows_are_skipped() {
        let mut data: Vec<u8> = Vec::new();
        for_each_row_mut(&mut data, 0, |_, _| panic!("no rows expected"));
    }

    #[test]
    fn paired_rows_stay_aligned() {
        let mut a = vec![0u32; 6];
        let mut b = vec![0f32; 6];
        for_each_row_pair_mut(&mut a, &mut b, 3, |y, ra, rb| {
            ra.fill(y as u32 + 1);
            rb.fill(y as f32 * 0.5);
        });
        assert_eq!(a, vec![1, 1, 1, 2, 2, 2]);
        assert_eq!(b, vec![0.0, 0.0, 0.0, 0.5, 0.5, 0.5]);
    }
}
