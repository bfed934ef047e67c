//! Frame buffer and the primitives effects are built from
//!
//! A frame holds one intensity level per LED. Levels run from 0 (dark) to
//! `L - 1` (full). All primitives are O(N), in place and deterministic.
//!
//! Examples in the method docs use `N = L = 6`.

/// Intensity levels for `N` LEDs with `L` levels each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameBuffer<const N: usize, const L: usize> {
    values: [u8; N],
}

impl<const N: usize, const L: usize> FrameBuffer<N, L> {
    /// Brightest level
    ///
    /// Levels are stored as `u8`, so `L` must lie in `1..=256`. Using a frame
    /// with any other `L` fails to build.
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX_LEVEL: u8 = {
        assert!(L > 0, "a frame needs at least one intensity level");
        assert!(L <= 256, "intensity levels must fit in a u8");
        (L - 1) as u8
    };

    /// A dark frame
    pub const fn new() -> Self {
        const {
            assert!(L > 0, "a frame needs at least one intensity level");
            assert!(L <= 256, "intensity levels must fit in a u8");
        }
        Self { values: [0; N] }
    }

    /// A frame with the given levels
    pub const fn from_levels(values: [u8; N]) -> Self {
        const {
            assert!(L > 0, "a frame needs at least one intensity level");
            assert!(L <= 256, "intensity levels must fit in a u8");
        }
        Self { values }
    }

    pub const fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// Level of a single LED
    pub fn get(&self, led: usize) -> Option<u8> {
        self.values.get(led).copied()
    }

    /// Set a single LED. Out of range indices are ignored.
    pub fn set(&mut self, led: usize, level: u8) {
        if let Some(value) = self.values.get_mut(led) {
            *value = level;
        }
    }

    /// Set every LED to `level`
    ///
    /// After: `[0, 0, 0, 0, 0, 0]` for `clear(0)`
    pub fn clear(&mut self, level: u8) {
        self.values.fill(level);
    }

    /// Rising ramp, `i * (L - 1) / N` rounded down
    ///
    /// After: `[0, 1, 2, 3, 4, 5]`
    pub fn ramp_right(&mut self) {
        for (i, value) in self.values.iter_mut().enumerate() {
            *value = scaled::<N, L>(i, 1);
        }
    }

    /// Falling ramp, the mirror image of [`ramp_right`](Self::ramp_right)
    ///
    /// After: `[5, 4, 3, 2, 1, 0]`
    pub fn ramp_left(&mut self) {
        for (i, value) in self.values.iter_mut().enumerate() {
            *value = scaled::<N, L>(N - i - 1, 1);
        }
    }

    /// Two mirrored ramps at double slope meeting in the middle
    ///
    /// The second half formula also covers the middle LED when N is odd.
    ///
    /// After: `[0, 1, 3, 3, 1, 0]`
    pub fn triangle(&mut self) {
        let (rising, falling) = self.values.split_at_mut(N / 2);
        for (i, value) in rising.iter_mut().enumerate() {
            *value = scaled::<N, L>(i, 2);
        }
        for (offset, value) in falling.iter_mut().enumerate() {
            let i = N / 2 + offset;
            *value = scaled::<N, L>(N - i - 1, 2);
        }
    }

    /// Move every level one step right, recycling the rightmost as leftmost
    ///
    /// Before: `[0, 1, 2, 3, 4, 5]`
    /// After:  `[5, 0, 1, 2, 3, 4]`
    pub fn rotate_right(&mut self) {
        self.values.rotate_right(usize::from(N > 0));
    }

    /// Move every level one step left, recycling the leftmost as rightmost
    ///
    /// Before: `[0, 1, 2, 3, 4, 5]`
    /// After:  `[1, 2, 3, 4, 5, 0]`
    pub fn rotate_left(&mut self) {
        self.values.rotate_left(usize::from(N > 0));
    }

    /// Level of the rightmost LED
    pub fn peek_right(&self) -> u8 {
        self.values.last().copied().unwrap_or(0)
    }

    /// Level of the leftmost LED
    pub fn peek_left(&self) -> u8 {
        self.values.first().copied().unwrap_or(0)
    }

    /// Move every level one step right and insert `left` on the left end
    ///
    /// Returns the level pushed out on the right.
    ///
    /// Before:   `[0, 1, 2, 3, 4, 5]`, left = 3
    /// After:    `[3, 0, 1, 2, 3, 4]`, returns 5
    pub fn shift_right(&mut self, left: u8) -> u8 {
        let evicted = self.peek_right();
        self.rotate_right();
        if let Some(first) = self.values.first_mut() {
            *first = left;
        }
        evicted
    }

    /// Move every level one step left and insert `right` on the right end
    ///
    /// Returns the level pushed out on the left.
    ///
    /// Before:   `[0, 1, 2, 3, 4, 5]`, right = 3
    /// After:    `[1, 2, 3, 4, 5, 3]`, returns 0
    pub fn shift_left(&mut self, right: u8) -> u8 {
        let evicted = self.peek_left();
        self.rotate_left();
        if let Some(last) = self.values.last_mut() {
            *last = right;
        }
        evicted
    }

    /// Reverse the order of the LEDs
    ///
    /// Before: `[0, 0, 1, 1, 3, 5]`
    /// After:  `[5, 3, 1, 1, 0, 0]`
    pub fn flip(&mut self) {
        self.values.reverse();
    }
}

impl<const N: usize, const L: usize> Default for FrameBuffer<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

/// `position * slope * (L - 1) / N`, truncated
///
/// Callers keep `position * slope < N`, so the result is below `L` and the
/// cast is lossless.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn scaled<const N: usize, const L: usize>(position: usize, slope: usize) -> u8 {
    (position * slope * usize::from(FrameBuffer::<N, L>::MAX_LEVEL) / N) as u8
}
