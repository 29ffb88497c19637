use crate::types::{Frame, Pattern};

/// A timed LED frame sequence with loop and transition metadata.
///
/// Animations live in the static catalog tables and are handed out by
/// reference. Two patterns that resolve to the same table entry share one
/// `Animation`, so identity (`core::ptr::eq`) is meaningful.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    frames: &'static [Frame],
    cycles: u8,
    next: Pattern,
}

impl Animation {
    /// Creates an animation that repeats forever.
    ///
    /// # Panics
    /// Panics (at compile time, in a const context) if `frames` is empty.
    pub const fn new(frames: &'static [Frame]) -> Self {
        Self::linked(frames, 0, Pattern::Null)
    }

    /// Creates an animation that plays `cycles` times and then switches to `next`.
    ///
    /// # Panics
    /// Panics (at compile time, in a const context) if `frames` is empty.
    pub const fn linked(frames: &'static [Frame], cycles: u8, next: Pattern) -> Self {
        assert!(!frames.is_empty(), "animation must have at least one frame");
        Self { frames, cycles, next }
    }

    /// Returns the frame at `index`, or `None` past the end.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames, in playback order.
    #[inline]
    pub fn frames(&self) -> &'static [Frame] {
        self.frames
    }

    /// Returns the number of frames in this animation.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of passes before switching to [`next`](Self::next). Zero repeats forever.
    #[inline]
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    /// Pattern to switch to once the cycles run out.
    #[inline]
    pub fn next(&self) -> Pattern {
        self.next
    }

    /// True if the animation hands control back to the pattern shown before it.
    #[inline]
    pub fn is_transient(&self) -> bool {
        self.next == Pattern::Previous
    }

    /// True if the animation switches pattern on its own after a finite cycle count.
    #[inline]
    pub fn auto_transitions(&self) -> bool {
        self.cycles != 0 && self.next != Pattern::Null
    }

    /// True if the animation never advances past its first frame.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.frames.len() == 1 || self.frames[0].is_hold()
    }

    /// Length of one pass through all frames in ticks.
    ///
    /// Returns `None` if any frame is held forever.
    pub fn cycle_ticks(&self) -> Option<u32> {
        self.frames.iter().try_fold(0u32, |total, frame| {
            if frame.is_hold() {
                None
            } else {
                Some(total + frame.duration as u32)
            }
        })
    }
}

/// Timing information returned by [`LedHandler::run`](crate::LedHandler::run).
///
/// Indicates when the handler needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// The current frame ends after this delay.
    Delay(D),

    /// The current frame is held until the pattern changes.
    Steady,
}

#[cfg(test)]
mod tests {
    use super::*;

    static BLINK: [Frame; 2] = [Frame::from_millis(0, 300), Frame::from_millis(1, 300)];
    static SOLID: [Frame; 1] = [Frame::hold(1)];
    static COUNT: [Frame; 2] = [Frame::from_millis(0, 100), Frame::hold(1)];

    #[test]
    fn infinite_animation_never_transitions() {
        let anim = Animation::new(&BLINK);
        assert_eq!(anim.cycles(), 0);
        assert_eq!(anim.next(), Pattern::Null);
        assert!(!anim.auto_transitions());
    }

    #[test]
    fn null_next_never_transitions() {
        let anim = Animation::linked(&BLINK, 4, Pattern::Null);
        assert!(!anim.auto_transitions());
    }

    #[test]
    fn linked_animation_reports_transient() {
        let anim = Animation::linked(&BLINK, 7, Pattern::Previous);
        assert!(anim.auto_transitions());
        assert!(anim.is_transient());
        assert_eq!(anim.cycle_ticks(), Some(60));
    }

    #[test]
    fn static_animations() {
        assert!(Animation::new(&SOLID).is_static());
        assert!(!Animation::new(&BLINK).is_static());
        assert!(!Animation::new(&COUNT).is_static());
        assert_eq!(Animation::new(&COUNT).cycle_ticks(), None);
    }

    #[test]
    fn frame_lookup_is_bounded() {
        let anim = Animation::new(&BLINK);
        assert_eq!(anim.frame_count(), 2);
        assert_eq!(anim.frame(1).map(|f| f.leds), Some(1));
        assert!(anim.frame(2).is_none());
    }
}
