//! Display helpers for wheel identifier sequences

use std::fmt;

/// Wheel arrangement implied by a number of wheels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelLayout {
    None,
    Unicycle,
    TwoWheeler,
    ThreeWheeler,
    /// The conventional four-wheel layout
    Standard,
    MultiWheel(usize),
}

impl WheelLayout {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => WheelLayout::None,
            1 => WheelLayout::Unicycle,
            2 => WheelLayout::TwoWheeler,
            3 => WheelLayout::ThreeWheeler,
            4 => WheelLayout::Standard,
            n => WheelLayout::MultiWheel(n),
        }
    }

    pub fn wheel_count(&self) -> usize {
        match self {
            WheelLayout::None => 0,
            WheelLayout::Unicycle => 1,
            WheelLayout::TwoWheeler => 2,
            WheelLayout::ThreeWheeler => 3,
            WheelLayout::Standard => 4,
            WheelLayout::MultiWheel(n) => *n,
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, WheelLayout::Standard)
    }
}

impl fmt::Display for WheelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelLayout::None => f.write_str("no wheels"),
            WheelLayout::Unicycle => f.write_str("unicycle"),
            WheelLayout::TwoWheeler => f.write_str("two-wheeler"),
            WheelLayout::ThreeWheeler => f.write_str("three-wheeler"),
            WheelLayout::Standard => f.write_str("standard four-wheel layout"),
            WheelLayout::MultiWheel(n) => write!(f, "{}-wheel layout", n),
        }
    }
}

/// Render identifiers as `Wheel identifier: [a, b, c]`, keeping input order.
///
/// An empty slice renders as `Wheel identifier: []`.
pub fn format_wheel_identifier(ids: &[i64]) -> String {
    format!("Wheel identifier: {:?}", ids)
}

/// Render identifiers together with the wheel layout their count implies.
///
/// ```
/// use tire_kit::format_size_of_wheels;
///
/// assert_eq!(
///     format_size_of_wheels(&[77, 42, 69]),
///     "Wheel sizes: [77, 42, 69] (3 wheels, three-wheeler)"
/// );
/// assert_eq!(format_size_of_wheels(&[]), "Wheel sizes: [] (no wheels)");
/// ```
pub fn format_size_of_wheels(ids: &[i64]) -> String {
    let layout = WheelLayout::from_count(ids.len());
    match ids.len() {
        0 => format!("Wheel sizes: {:?} ({})", ids, layout),
        1 => format!("Wheel sizes: {:?} (1 wheel, {})", ids, layout),
        n => format!("Wheel sizes: {:?} ({} wheels, {})", ids, n, layout),
    }
}
