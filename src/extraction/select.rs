use crate::models::{CardSlot, CardValue, Decision};

/// Lowest numeric reading below which an unrecognized card elsewhere is
/// treated as the special-card target.
const SPECIAL_OVERRIDE_CEILING: u16 = 100;

/// Pick the priority card from the three slot readings.
///
/// Default rule: the slot with the lowest reading wins. Override: when the
/// highest reading is unrecognized and the lowest is below 100, the
/// unrecognized slot is chosen as a special card, but the lowest slot's
/// numeric reading is still the one reported. Ties for lowest and highest
/// both break to the earliest slot index.
pub fn choose_target(readings: &[(CardSlot, CardValue); 3]) -> Decision {
    let mut lowest = &readings[0];
    let mut highest = &readings[0];
    for reading in &readings[1..] {
        if reading.1 < lowest.1 {
            lowest = reading;
        }
        if reading.1 > highest.1 {
            highest = reading;
        }
    }

    if let (CardValue::Unrecognized, CardValue::Numeric(low)) = (highest.1, lowest.1) {
        if low < SPECIAL_OVERRIDE_CEILING {
            return Decision {
                slot: highest.0,
                value: CardValue::Numeric(low),
            };
        }
    }

    Decision {
        slot: lowest.0,
        value: lowest.1,
    }
}
