//! Command-based control for LED handlers.

use crate::types::Pattern;

/// Actions for controlling an [`LedHandler`](crate::LedHandler).
///
/// Lets a USB or button task hand requests to the task that owns the handler,
/// e.g. through a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedAction {
    /// Switch pattern immediately.
    Set(Pattern),
    /// Switch pattern, following animation links.
    Link(Pattern),
    /// Switch pattern immediately, from a host driver byte.
    SetRaw(u8),
    /// Switch pattern following animation links, from a host driver byte.
    LinkRaw(u8),
    /// Stop writing to the LEDs.
    Pause,
    /// Resume writing to the LEDs.
    Resume,
    /// Write the last frame again.
    Rewrite,
}

impl LedAction {
    /// Action for a pattern byte reported by the host driver.
    ///
    /// Host reports are linked so a flash settles into its player pattern.
    pub fn from_host(value: u8) -> Self {
        LedAction::LinkRaw(value)
    }
}

impl From<Pattern> for LedAction {
    fn from(pattern: Pattern) -> Self {
        LedAction::Set(pattern)
    }
}
