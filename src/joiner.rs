//! Execution strategies for the two halves of a fork.
//!
//! The coordinator is written against this small scheduler seam, so the
//! fork/join decision stays an ordinary call and the recursion can be tested
//! with a scheduler that never leaves the calling thread.

/// A structured fork-join primitive.
pub(crate) trait Joiner {
    /// Runs both closures and returns only once both have completed,
    /// including everything they forked transitively.
    fn join<A, B>(oper_a: A, oper_b: B)
    where
        A: FnOnce() + Send,
        B: FnOnce() + Send;
}

/// Forks both sides into the ambient rayon pool.
///
/// One side runs on the current worker, the other becomes stealable by any
/// idle worker; a worker blocked on the join steals pending tasks instead of
/// idling. Rayon guarantees eventual completion of both sides and resurfaces
/// a panic from either side at the join.
pub(crate) struct Parallel;

impl Joiner for Parallel {
    #[inline]
    fn join<A, B>(oper_a: A, oper_b: B)
    where
        A: FnOnce() + Send,
        B: FnOnce() + Send,
    {
        rayon::join(oper_a, oper_b);
    }
}

/// Runs both sides immediately on the calling thread, in order. No tasks, no
/// pool, same observable result.
#[cfg(test)]
pub(crate) struct Sequential;

#[cfg(test)]
impl Joiner for Sequential {
    #[inline]
    fn join<A, B>(oper_a: A, oper_b: B)
    where
        A: FnOnce() + Send,
        B: FnOnce() + Send,
    {
        oper_a();
        oper_b();
    }
}
