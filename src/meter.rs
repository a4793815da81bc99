//! text bar rendering.

use std::iter::{once, repeat_n};

/// renders a bar of `offset + floor(value * scale)` fill glyphs and one trailing glyph.
///
/// negative or non-finite products add no fill beyond the offset.
pub fn render_bar(value: f64, offset: usize, scale: f64, fill: &str, trail: &str) -> String {
    let extra = (value * scale).floor();
    let extra = if extra.is_finite() && extra > 0.0 {
        extra as usize
    } else {
        0
    };

    repeat_n(fill, offset + extra).chain(once(trail)).collect()
}

/// the direction and size of a change in memory usage between two ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    /// usage did not change at all.
    Steady,
    /// usage fell by less than [`Trend::SIGNIFICANT`].
    Dipped,
    /// usage rose by less than [`Trend::SIGNIFICANT`].
    Crept,
    /// usage rose by at least [`Trend::SIGNIFICANT`].
    Rose,
    /// usage fell by at least [`Trend::SIGNIFICANT`].
    Fell,
}

// === impl Trend ===

impl Trend {
    /// the smallest change, in gigabytes, that flips the bar's glyphs.
    pub const SIGNIFICANT: f64 = 0.01;

    pub fn classify(delta: f64) -> Self {
        let small = delta.abs() < Self::SIGNIFICANT;
        if delta == 0.0 {
            Self::Steady
        } else if delta < 0.0 && small {
            Self::Dipped
        } else if delta > 0.0 && small {
            Self::Crept
        } else if delta > 0.0 {
            Self::Rose
        } else {
            Self::Fell
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Self::Steady => "",
            Self::Dipped | Self::Crept => "o",
            Self::Rose => "#",
            Self::Fell => ":",
        }
    }

    pub fn trail(self) -> &'static str {
        match self {
            Self::Steady => "o",
            Self::Dipped => "-",
            Self::Crept => "+",
            Self::Rose => "*",
            Self::Fell => "@",
        }
    }
}

/// renders the cpu usage bar for one sample.
pub fn cpu_bar(usage: f64) -> String {
    render_bar(usage, 3, 1.0, "|", "")
}

/// renders the memory bar for a sample, given the change since the previous sample.
///
/// the first sample has nothing to compare against, and renders a lone placeholder.
pub fn memory_bar(delta: Option<f64>) -> String {
    match delta {
        None => render_bar(0.0, 1, 1.0, "", "o"),
        Some(delta) => {
            let trend = Trend::classify(delta);
            render_bar(delta.abs(), 1, 100.0, trend.fill(), trend.trail())
        }
    }
}
