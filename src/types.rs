//! Core types: patterns, frames and the tick timescale.

/// Length of one frame tick in milliseconds.
pub const TICK_MILLIS: u64 = 10;

/// A named LED behavior, enumerated by the index the host driver sends.
///
/// The fourteen named patterns map 1:1 to wire values `0x00..=0x0D`.
/// `Previous` and `Null` are meta values with no wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pattern {
    Off = 0x00,
    Blinking = 0x01,
    Flash1 = 0x02,
    Flash2 = 0x03,
    Flash3 = 0x04,
    Flash4 = 0x05,
    Player1 = 0x06,
    Player2 = 0x07,
    Player3 = 0x08,
    Player4 = 0x09,
    Rotating = 0x0A,
    BlinkOnce = 0x0B,
    BlinkSlow = 0x0C,
    Alternating = 0x0D,

    /// Go back to whatever pattern was active before the current one.
    Previous,
    /// Not a pattern.
    Null,
}

impl Pattern {
    /// Number of patterns with a wire encoding.
    pub const NUM_PATTERNS: u8 = 14;

    /// Every pattern with a wire encoding, in wire order.
    pub const ALL: [Pattern; Self::NUM_PATTERNS as usize] = [
        Pattern::Off,
        Pattern::Blinking,
        Pattern::Flash1,
        Pattern::Flash2,
        Pattern::Flash3,
        Pattern::Flash4,
        Pattern::Player1,
        Pattern::Player2,
        Pattern::Player3,
        Pattern::Player4,
        Pattern::Rotating,
        Pattern::BlinkOnce,
        Pattern::BlinkSlow,
        Pattern::Alternating,
    ];

    /// Decodes a host driver byte. Returns `None` for anything past `Alternating`.
    #[inline]
    pub fn from_wire(value: u8) -> Option<Pattern> {
        Self::ALL.get(value as usize).copied()
    }

    /// Wire value for this pattern, `None` for the meta patterns.
    #[inline]
    pub fn to_wire(self) -> Option<u8> {
        if self.is_meta() { None } else { Some(self as u8) }
    }

    /// True for `Previous` and `Null`.
    #[inline]
    pub fn is_meta(self) -> bool {
        matches!(self, Pattern::Previous | Pattern::Null)
    }

    /// True for `Flash1` through `Flash4`.
    #[inline]
    pub fn is_flash(self) -> bool {
        matches!(
            self,
            Pattern::Flash1 | Pattern::Flash2 | Pattern::Flash3 | Pattern::Flash4
        )
    }

    /// Player number (1-4) for the flash and player patterns.
    pub fn player(self) -> Option<u8> {
        match self {
            Pattern::Flash1 | Pattern::Player1 => Some(1),
            Pattern::Flash2 | Pattern::Player2 => Some(2),
            Pattern::Flash3 | Pattern::Player3 => Some(3),
            Pattern::Flash4 | Pattern::Player4 => Some(4),
            _ => None,
        }
    }

    /// The steady player pattern a flash pattern settles into.
    pub fn flash_target(self) -> Option<Pattern> {
        match self {
            Pattern::Flash1 => Some(Pattern::Player1),
            Pattern::Flash2 => Some(Pattern::Player2),
            Pattern::Flash3 => Some(Pattern::Player3),
            Pattern::Flash4 => Some(Pattern::Player4),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Pattern {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pattern::from_wire(value).ok_or(PatternError::OutOfRange(value))
    }
}

/// One LED snapshot and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Packed LED states, bit i = LED i lit.
    pub leds: u8,

    /// Hold time in ticks. Zero holds forever.
    pub duration: u16,
}

impl Frame {
    /// Creates a frame from a duration in milliseconds.
    ///
    /// Milliseconds are truncated to whole ticks.
    pub const fn from_millis(leds: u8, millis: u32) -> Self {
        Self {
            leds,
            duration: (millis as u64 / TICK_MILLIS) as u16,
        }
    }

    /// A frame that is held until the pattern changes.
    pub const fn hold(leds: u8) -> Self {
        Self { leds, duration: 0 }
    }

    /// True if this frame is never advanced past.
    #[inline]
    pub const fn is_hold(&self) -> bool {
        self.duration == 0
    }

    /// Hold time in milliseconds.
    #[inline]
    pub const fn duration_millis(&self) -> u64 {
        self.duration as u64 * TICK_MILLIS
    }
}

/// Pattern decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// Byte is not a defined host pattern.
    OutOfRange(u8),
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::OutOfRange(value) => {
                write!(
                    f,
                    "pattern value {:#04x} is out of range (max {:#04x})",
                    value,
                    Pattern::NUM_PATTERNS - 1
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_host_driver() {
        for (index, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.to_wire(), Some(index as u8));
            assert_eq!(Pattern::from_wire(index as u8), Some(*pattern));
        }
        assert_eq!(Pattern::Alternating as u8, 0x0D);
    }

    #[test]
    fn meta_patterns_have_no_wire_value() {
        assert_eq!(Pattern::Previous.to_wire(), None);
        assert_eq!(Pattern::Null.to_wire(), None);
        assert_eq!(Pattern::from_wire(0x0E), None);
        assert_eq!(Pattern::from_wire(0xFF), None);
    }

    #[test]
    fn try_from_reports_out_of_range() {
        assert_eq!(Pattern::try_from(0x03), Ok(Pattern::Flash2));
        assert_eq!(Pattern::try_from(0x20), Err(PatternError::OutOfRange(0x20)));
    }

    #[test]
    fn flash_patterns_settle_on_matching_player() {
        assert_eq!(Pattern::Flash3.flash_target(), Some(Pattern::Player3));
        assert_eq!(Pattern::Player3.flash_target(), None);
        assert_eq!(Pattern::Flash4.player(), Pattern::Player4.player());
        assert!(!Pattern::Player1.is_flash());
    }

    #[test]
    fn frame_converts_millis_to_ticks() {
        let frame = Frame::from_millis(0b0001, 300);
        assert_eq!(frame.duration, 30);
        assert_eq!(frame.duration_millis(), 300);
        assert!(Frame::hold(0).is_hold());
    }
}
