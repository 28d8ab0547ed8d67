use std::fmt;

/// Reported at the external boundary when a region yields no usable reading.
pub const SENTINEL: u16 = 9999;

/// One of the three fixed horizontal thirds of a drop screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    First,
    Second,
    Third,
}

impl CardSlot {
    pub const ALL: [CardSlot; 3] = [CardSlot::First, CardSlot::Second, CardSlot::Third];

    pub fn index(self) -> usize {
        match self {
            CardSlot::First => 0,
            CardSlot::Second => 1,
            CardSlot::Third => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardSlot::First => "Card 1",
            CardSlot::Second => "Card 2",
            CardSlot::Third => "Card 3",
        }
    }

    /// Fixed per-slot filename for the thresholded diagnostic image.
    /// Overwritten on every run.
    pub fn diagnostic_filename(self) -> &'static str {
        match self {
            CardSlot::First => "card_1_thresholded.png",
            CardSlot::Second => "card_2_thresholded.png",
            CardSlot::Third => "card_3_thresholded.png",
        }
    }
}

impl fmt::Display for CardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value read from a card's value region.
///
/// `Unrecognized` covers both OCR misses and genuinely non-numeric "special"
/// cards. The derived `Ord` places it above every `Numeric` reading, so it
/// acts as the natural worst element in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CardValue {
    /// A recognized G value in [1, 2000].
    Numeric(u16),
    Unrecognized,
}

impl CardValue {
    /// Numeric form used at the reporting boundary: the reading itself,
    /// or [`SENTINEL`] for an unrecognized region.
    pub fn reported(self) -> u16 {
        match self {
            CardValue::Numeric(v) => v,
            CardValue::Unrecognized => SENTINEL,
        }
    }

    pub fn is_unrecognized(self) -> bool {
        matches!(self, CardValue::Unrecognized)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Numeric(v) => write!(f, "G{}", v),
            CardValue::Unrecognized => f.write_str("Special"),
        }
    }
}

/// The selector's output: which slot to act on and the value to report.
///
/// In the special-card branch the reported value is the lowest reading from
/// a *different* slot, so callers must not assume the value was read from
/// the chosen slot's own region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub slot: CardSlot,
    pub value: CardValue,
}
