use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Lets read-only container methods (`peek`, `iter`) record calls without
/// requiring `&mut self`. Containers are single-threaded, so no
/// synchronization is involved.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

impl Clone for MetricsCell {
    fn clone(&self) -> Self {
        Self(Cell::new(self.get()))
    }
}
