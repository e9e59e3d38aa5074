//! Three-glyph ASCII progress bars, e.g. `[##=--]`.

use wk_core::errors::Result;
use wk_core::{ensure, Integer, Real};

/// Bar count used when none is given.
pub const DEFAULT_BARS: Integer = 10;

/// How many bars of each kind a value fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSegments {
    /// Completely filled bars.
    pub full: usize,
    /// Half-filled bars (0 or 1).
    pub half: usize,
    /// Empty bars.
    pub empty: usize,
}

impl BarSegments {
    /// Split `value` (in `[0, 1]`) over `bar_count` bars.
    ///
    /// A bar is half-filled when at least half of it is covered.
    pub fn split(value: Real, bar_count: Integer) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&value),
            "Invalid progressbar value: {value}"
        );
        ensure!(bar_count > 0, "Invalid number of bars: {bar_count}");

        let bars = bar_count as usize;
        let percent = value * 100.0;
        let step = 100.0 / bar_count as Real;
        let ratio = percent / step;

        let full = (ratio.floor() as usize).min(bars);
        let half = usize::from(full < bars && ratio - full as Real >= 0.5);
        Ok(BarSegments {
            full,
            half,
            empty: bars - full - half,
        })
    }

    /// Total number of bars.
    pub fn len(&self) -> usize {
        self.full + self.half + self.empty
    }

    /// Return `true` if there are no bars at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The glyphs a progress bar is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    /// Glyph for a filled bar.
    pub full: char,
    /// Glyph for a half-filled bar.
    pub half: char,
    /// Glyph for an empty bar.
    pub empty: char,
}

impl ProgressBar {
    /// `#` full, `=` half, `-` empty.
    pub const ASCII: ProgressBar = ProgressBar::with_chars('#', '=', '-');

    /// A bar drawn with custom glyphs.
    pub const fn with_chars(full: char, half: char, empty: char) -> Self {
        ProgressBar { full, half, empty }
    }

    /// Render `value` (in `[0, 1]`) as `bar_count` bars between brackets.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](wk_core::Error::InvalidArgument) if
    /// `value` is outside `[0, 1]` (or NaN) or `bar_count` is not positive.
    ///
    /// ```
    /// use wk_progress::ProgressBar;
    ///
    /// assert_eq!(ProgressBar::ASCII.render(0.5, 5).unwrap(), "[##=--]");
    /// ```
    pub fn render(&self, value: Real, bar_count: Integer) -> Result<String> {
        let segments = BarSegments::split(value, bar_count)?;
        let mut out = String::with_capacity(segments.len() + 2);
        out.push('[');
        out.extend(std::iter::repeat(self.full).take(segments.full));
        out.extend(std::iter::repeat(self.half).take(segments.half));
        out.extend(std::iter::repeat(self.empty).take(segments.empty));
        out.push(']');
        Ok(out)
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::ASCII
    }
}

/// Render `value` with the default glyphs.
pub fn make_progressbar(value: Real, bar_count: Integer) -> Result<String> {
    ProgressBar::default().render(value, bar_count)
}
