// Random selection seam
//
// The engine draws one candidate per call through this trait so tests can
// substitute a deterministic picker.

/// Uniform selection of an index into a response pool.
pub trait ResponsePicker: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..len)
    }
}
