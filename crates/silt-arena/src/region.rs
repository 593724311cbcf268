//! Non-owning, fixed-length views over caller-supplied unit buffers.
//!
//! A [`Region`] borrows a `&mut [T]` for its whole lifetime. It never
//! allocates, frees, or resizes the buffer; it only moves units that
//! already lie inside it and overwrites vacated units with
//! [`Unit::FREE`].
//!
//! Range contract: every offset passed to [`Region::shift_right`] and
//! [`Region::fill_free`] must lie inside the view. Debug builds report a
//! violation with a descriptive assertion; release builds still panic
//! through slice indexing rather than touching memory outside the view.

use std::ops::Range;

use silt_core::{RegionError, Unit};

/// A mutable, fixed-length view over an externally owned unit buffer.
#[derive(Debug)]
pub struct Region<'a, T> {
    units: &'a mut [T],
}

impl<'a, T: Unit> Region<'a, T> {
    /// View the whole buffer.
    pub fn new(units: &'a mut [T]) -> Self {
        Self { units }
    }

    /// View `len` units of `buffer` starting at `start`.
    ///
    /// Offsets reported by anything built on this region are relative to
    /// `start`, not to the beginning of `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::WindowOutOfBounds`] if the window does not
    /// fit inside `buffer`.
    pub fn window(buffer: &'a mut [T], start: usize, len: usize) -> Result<Self, RegionError> {
        let buffer_len = buffer.len();
        let out_of_bounds = RegionError::WindowOutOfBounds {
            start,
            len,
            buffer_len,
        };
        let end = start.checked_add(len).ok_or_else(|| out_of_bounds.clone())?;
        let units = buffer.get_mut(start..end).ok_or(out_of_bounds)?;
        Ok(Self { units })
    }

    /// Number of units in the view.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the view covers no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Read access to the units.
    pub fn units(&self) -> &[T] {
        &*self.units
    }

    /// Write access to the units.
    pub fn units_mut(&mut self) -> &mut [T] {
        &mut *self.units
    }

    /// Release the view, handing the borrowed buffer back to the caller.
    pub fn into_units(self) -> &'a mut [T] {
        self.units
    }

    /// Move `src_len` units starting at `src_start` forward by `by`
    /// positions. Source and destination may overlap.
    ///
    /// The vacated units keep their stale contents; callers pair this
    /// with [`fill_free`](Self::fill_free).
    pub fn shift_right(&mut self, src_start: usize, src_len: usize, by: usize) {
        let src = self.checked_range(src_start, src_len);
        debug_assert!(
            src.end + by <= self.units.len(),
            "shift destination {}..{} exceeds region of {} units",
            src.start + by,
            src.end + by,
            self.units.len()
        );
        if src_len == 0 || by == 0 {
            return;
        }
        self.units.copy_within(src, src_start + by);
    }

    /// Overwrite `len` units from `start` with the free sentinel.
    pub fn fill_free(&mut self, start: usize, len: usize) {
        let range = self.checked_range(start, len);
        self.units[range].fill(T::FREE);
    }

    fn checked_range(&self, start: usize, len: usize) -> Range<usize> {
        debug_assert!(
            start + len <= self.units.len(),
            "range {}..{} exceeds region of {} units",
            start,
            start + len,
            self.units.len()
        );
        start..start + len
    }
}
