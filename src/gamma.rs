//! Perceptual brightness correction
//!
//! Maps a linear intensity level to the PWM duty value that makes the LED
//! look that bright. The renderer counts duty values from 1 to [`MAX_DUTY`],
//! so a duty of 0 keeps the LED dark for the whole tick.

use core::fmt;

/// Largest duty value. A LED with this duty stays lit for the whole tick.
pub const MAX_DUTY: u8 = u8::MAX;

/// Quadratic table for 18 intensity levels, as measured on the reference board.
pub const QUADRATIC_18: [u8; 18] = [
    0, 1, 4, 8, 14, 22, 32, 43, 56, 71, 88, 107, 127, 149, 173, 199, 226, 255,
];

/// Reasons a duty table is rejected by [`GammaTable::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GammaError {
    /// Level 0 does not map to duty 0
    NotDarkAtZero(u8),
    /// The top level does not map to [`MAX_DUTY`]
    NotFullAtTop(u8),
    /// The entry at this level is smaller than the one before it
    Decreasing { level: usize },
}

impl fmt::Display for GammaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDarkAtZero(duty) => write!(f, "level 0 maps to duty {duty}, expected 0"),
            Self::NotFullAtTop(duty) => {
                write!(f, "top level maps to duty {duty}, expected {MAX_DUTY}")
            }
            Self::Decreasing { level } => write!(f, "duty decreases at level {level}"),
        }
    }
}

/// Immutable lookup from intensity level to duty value
///
/// `L` is the number of intensity levels, from 2 to 256. Every table
/// satisfies: level 0 maps to 0, level `L - 1` maps to [`MAX_DUTY`], and
/// entries never decrease. Building a table with any other `L` fails to
/// compile, so a dark level can never be given a non-zero duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammaTable<const L: usize> {
    duties: [u8; L],
}

impl<const L: usize> GammaTable<L> {
    /// Build a table from explicit duty values, checking its invariants
    pub fn new(duties: [u8; L]) -> Result<Self, GammaError> {
        const {
            assert!(L >= 2, "a gamma table needs a dark and a full level");
            assert!(L <= 256, "intensity levels must fit in a u8");
        }
        let (first, last) = (duties[0], duties[L - 1]);
        if first != 0 {
            return Err(GammaError::NotDarkAtZero(first));
        }
        if last != MAX_DUTY {
            return Err(GammaError::NotFullAtTop(last));
        }
        if let Some(index) = duties.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(GammaError::Decreasing { level: index + 1 });
        }
        Ok(Self { duties })
    }

    /// Quadratic curve, `round(255 * i² / (L - 1)²)`
    ///
    /// For `L = 18` this reproduces [`QUADRATIC_18`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn quadratic() -> Self {
        const {
            assert!(L >= 2, "a gamma table needs a dark and a full level");
            assert!(L <= 256, "intensity levels must fit in a u8");
        }
        let mut duties = [0u8; L];
        let top = ((L - 1) * (L - 1)) as u32;
        let mut i = 0;
        while i < L {
            let square = (i * i) as u32;
            duties[i] = ((square * MAX_DUTY as u32 + top / 2) / top) as u8;
            i += 1;
        }
        Self { duties }
    }

    /// Power curve `255 * (i / (L - 1))^exponent`, rounded
    ///
    /// Endpoints are pinned to 0 and [`MAX_DUTY`] so the invariants hold for
    /// any positive exponent.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn power(exponent: f32) -> Self {
        const {
            assert!(L >= 2, "a gamma table needs a dark and a full level");
            assert!(L <= 256, "intensity levels must fit in a u8");
        }
        let mut duties = [0u8; L];
        let top = L - 1;
        let mut previous = 0u8;
        for (level, duty) in duties.iter_mut().enumerate() {
            let ratio = level as f32 / top as f32;
            let value = libm::roundf(libm::powf(ratio, exponent) * f32::from(MAX_DUTY));
            let value = value.clamp(0.0, f32::from(MAX_DUTY)) as u8;
            // powf is monotonic, but rounding noise must never break ordering
            previous = value.max(previous);
            *duty = previous;
        }
        duties[0] = 0;
        duties[top] = MAX_DUTY;
        Self { duties }
    }

    /// Duty value for an intensity level
    ///
    /// Levels past the top of the table saturate to the top entry.
    #[inline]
    pub fn duty(&self, level: u8) -> u8 {
        match self.duties.get(usize::from(level)) {
            Some(&duty) => duty,
            None => self.duties.last().copied().unwrap_or(0),
        }
    }

    /// Number of intensity levels
    pub const fn levels(&self) -> usize {
        L
    }

    /// Raw duty values
    pub const fn as_slice(&self) -> &[u8] {
        &self.duties
    }
}

impl GammaTable<18> {
    /// Table of the reference board
    pub const fn reference() -> Self {
        Self {
            duties: QUADRATIC_18,
        }
    }
}

impl<const L: usize> Default for GammaTable<L> {
    fn default() -> Self {
        Self::quadratic()
    }
}
