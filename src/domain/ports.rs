use crate::utils::error::Result;

/// Length oracle for the bounded search. Implementations may recompute every
/// trajectory or cache lengths seen as intermediate steps; the search only
/// needs element counts, never the materialized sequence.
pub trait LengthSource {
    fn length(&mut self, n: u64) -> Result<u64>;
}
