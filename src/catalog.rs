//! Animation tables reproducing the controller's LED language.
//!
//! One table exists per supported LED count. [`Catalog::lookup`] is total:
//! anything without a dedicated entry plays the "off" animation.

use crate::animation::Animation;
use crate::types::{Frame, Pattern};

/// Static pattern-to-animation lookup for a board with `LEDS` status LEDs.
///
/// Only 1 and 4 LEDs are supported. Any other count fails to compile as
/// soon as the catalog is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog<const LEDS: usize>;

impl<const LEDS: usize> Catalog<LEDS> {
    /// Evaluates to `()` for a supported LED count and fails the build otherwise.
    pub const SUPPORTED: () = assert!(LEDS == 1 || LEDS == 4, "LED count must be 1 or 4");

    /// Returns the animation that realizes `pattern` on this board.
    pub fn lookup(pattern: Pattern) -> &'static Animation {
        let () = Self::SUPPORTED;
        if LEDS == 1 {
            single::lookup(pattern)
        } else {
            quad::lookup(pattern)
        }
    }
}

/// Animations for boards with a single status LED.
mod single {
    use super::*;

    const BLINK_TIME: u32 = 450;
    const FLASH_TIME: u32 = 100;
    const PLAYER_TIME: u32 = 100;
    const PLAYER_FLASH_COUNT: u8 = 10;

    const ON: u8 = 1;
    const OFF: u8 = 0;

    static FRAMES_OFF: [Frame; 1] = [Frame::hold(OFF)];
    static FRAMES_BLINKING: [Frame; 2] = [
        Frame::from_millis(OFF, BLINK_TIME),
        Frame::from_millis(ON, BLINK_TIME),
    ];
    static FRAMES_FLASH: [Frame; 2] = [
        Frame::from_millis(OFF, FLASH_TIME),
        Frame::from_millis(ON, FLASH_TIME),
    ];

    // Player n pulses n times and keeps the last pulse lit.
    static FRAMES_PLAYER1: [Frame; 1] = [Frame::hold(ON)];
    static FRAMES_PLAYER2: [Frame; 4] = [
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::hold(ON),
    ];
    static FRAMES_PLAYER3: [Frame; 6] = [
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::hold(ON),
    ];
    static FRAMES_PLAYER4: [Frame; 8] = [
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::from_millis(ON, PLAYER_TIME),
        Frame::from_millis(OFF, PLAYER_TIME),
        Frame::hold(ON),
    ];

    static ANIM_OFF: Animation = Animation::new(&FRAMES_OFF);
    static ANIM_BLINKING: Animation = Animation::new(&FRAMES_BLINKING);

    static ANIM_FLASH1: Animation =
        Animation::linked(&FRAMES_FLASH, PLAYER_FLASH_COUNT, Pattern::Player1);
    static ANIM_FLASH2: Animation =
        Animation::linked(&FRAMES_FLASH, PLAYER_FLASH_COUNT, Pattern::Player2);
    static ANIM_FLASH3: Animation =
        Animation::linked(&FRAMES_FLASH, PLAYER_FLASH_COUNT, Pattern::Player3);
    static ANIM_FLASH4: Animation =
        Animation::linked(&FRAMES_FLASH, PLAYER_FLASH_COUNT, Pattern::Player4);

    static ANIM_PLAYER1: Animation = Animation::new(&FRAMES_PLAYER1);
    static ANIM_PLAYER2: Animation = Animation::new(&FRAMES_PLAYER2);
    static ANIM_PLAYER3: Animation = Animation::new(&FRAMES_PLAYER3);
    static ANIM_PLAYER4: Animation = Animation::new(&FRAMES_PLAYER4);

    pub(super) fn lookup(pattern: Pattern) -> &'static Animation {
        match pattern {
            Pattern::Off => &ANIM_OFF,
            Pattern::Blinking => &ANIM_BLINKING,
            Pattern::Flash1 => &ANIM_FLASH1,
            Pattern::Flash2 => &ANIM_FLASH2,
            Pattern::Flash3 => &ANIM_FLASH3,
            Pattern::Flash4 => &ANIM_FLASH4,
            Pattern::Player1 => &ANIM_PLAYER1,
            Pattern::Player2 => &ANIM_PLAYER2,
            Pattern::Player3 => &ANIM_PLAYER3,
            Pattern::Player4 => &ANIM_PLAYER4,
            // A single LED can't rotate or alternate
            Pattern::Rotating | Pattern::BlinkOnce | Pattern::BlinkSlow | Pattern::Alternating => {
                &ANIM_BLINKING
            }
            Pattern::Previous | Pattern::Null => &ANIM_OFF,
        }
    }
}

/// Animations for boards with four status LEDs, one per player quadrant.
mod quad {
    use super::*;

    const BLINK_TIME: u32 = 300;
    const BLINK_SLOW: u32 = 700;
    const ROTATE_TIME: u32 = 100;

    const PLAYER_BLINK_COUNT: u8 = 3;

    const STATES_OFF: u8 = 0b0000;
    const STATES_ON: u8 = 0b1111;

    const STATES_PLAYER1: u8 = 1 << 0;
    const STATES_PLAYER2: u8 = 1 << 1;
    const STATES_PLAYER3: u8 = 1 << 2;
    const STATES_PLAYER4: u8 = 1 << 3;

    const STATES_OP1: u8 = 0b1010;
    const STATES_OP2: u8 = 0b0101;

    static FRAMES_OFF: [Frame; 1] = [Frame::hold(STATES_OFF)];
    static FRAMES_BLINKING: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_TIME),
        Frame::from_millis(STATES_ON, BLINK_TIME),
    ];
    static FRAMES_BLINK_SLOW: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_SLOW),
        Frame::from_millis(STATES_ON, BLINK_TIME),
    ];

    static FRAMES_FLASH1: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_TIME),
        Frame::from_millis(STATES_PLAYER1, BLINK_TIME),
    ];
    static FRAMES_FLASH2: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_TIME),
        Frame::from_millis(STATES_PLAYER2, BLINK_TIME),
    ];
    static FRAMES_FLASH3: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_TIME),
        Frame::from_millis(STATES_PLAYER3, BLINK_TIME),
    ];
    static FRAMES_FLASH4: [Frame; 2] = [
        Frame::from_millis(STATES_OFF, BLINK_TIME),
        Frame::from_millis(STATES_PLAYER4, BLINK_TIME),
    ];

    static FRAMES_PLAYER1: [Frame; 1] = [Frame::hold(STATES_PLAYER1)];
    static FRAMES_PLAYER2: [Frame; 1] = [Frame::hold(STATES_PLAYER2)];
    static FRAMES_PLAYER3: [Frame; 1] = [Frame::hold(STATES_PLAYER3)];
    static FRAMES_PLAYER4: [Frame; 1] = [Frame::hold(STATES_PLAYER4)];

    static FRAMES_ROTATING: [Frame; 4] = [
        Frame::from_millis(STATES_PLAYER1, ROTATE_TIME),
        Frame::from_millis(STATES_PLAYER2, ROTATE_TIME),
        Frame::from_millis(STATES_PLAYER3, ROTATE_TIME),
        Frame::from_millis(STATES_PLAYER4, ROTATE_TIME),
    ];
    static FRAMES_ALTERNATING: [Frame; 2] = [
        Frame::from_millis(STATES_OP1, BLINK_TIME),
        Frame::from_millis(STATES_OP2, BLINK_TIME),
    ];

    static ANIM_OFF: Animation = Animation::new(&FRAMES_OFF);
    // Fast blink four times, then fall through to the slow blink
    static ANIM_BLINKING: Animation = Animation::linked(&FRAMES_BLINKING, 4, Pattern::BlinkSlow);
    static ANIM_BLINK_ONCE: Animation =
        Animation::linked(&FRAMES_BLINK_SLOW, 1, Pattern::Previous);
    static ANIM_BLINK_SLOW: Animation =
        Animation::linked(&FRAMES_BLINK_SLOW, 16, Pattern::Previous);

    static ANIM_FLASH1: Animation =
        Animation::linked(&FRAMES_FLASH1, PLAYER_BLINK_COUNT, Pattern::Player1);
    static ANIM_FLASH2: Animation =
        Animation::linked(&FRAMES_FLASH2, PLAYER_BLINK_COUNT, Pattern::Player2);
    static ANIM_FLASH3: Animation =
        Animation::linked(&FRAMES_FLASH3, PLAYER_BLINK_COUNT, Pattern::Player3);
    static ANIM_FLASH4: Animation =
        Animation::linked(&FRAMES_FLASH4, PLAYER_BLINK_COUNT, Pattern::Player4);

    static ANIM_PLAYER1: Animation = Animation::new(&FRAMES_PLAYER1);
    static ANIM_PLAYER2: Animation = Animation::new(&FRAMES_PLAYER2);
    static ANIM_PLAYER3: Animation = Animation::new(&FRAMES_PLAYER3);
    static ANIM_PLAYER4: Animation = Animation::new(&FRAMES_PLAYER4);

    static ANIM_ROTATING: Animation = Animation::linked(&FRAMES_ROTATING, 50, Pattern::Previous);
    static ANIM_ALTERNATING: Animation =
        Animation::linked(&FRAMES_ALTERNATING, 7, Pattern::Previous);

    pub(super) fn lookup(pattern: Pattern) -> &'static Animation {
        match pattern {
            Pattern::Off => &ANIM_OFF,
            Pattern::Blinking => &ANIM_BLINKING,
            Pattern::Flash1 => &ANIM_FLASH1,
            Pattern::Flash2 => &ANIM_FLASH2,
            Pattern::Flash3 => &ANIM_FLASH3,
            Pattern::Flash4 => &ANIM_FLASH4,
            Pattern::Player1 => &ANIM_PLAYER1,
            Pattern::Player2 => &ANIM_PLAYER2,
            Pattern::Player3 => &ANIM_PLAYER3,
            Pattern::Player4 => &ANIM_PLAYER4,
            Pattern::Rotating => &ANIM_ROTATING,
            Pattern::BlinkOnce => &ANIM_BLINK_ONCE,
            Pattern::BlinkSlow => &ANIM_BLINK_SLOW,
            Pattern::Alternating => &ANIM_ALTERNATING,
            Pattern::Previous | Pattern::Null => &ANIM_OFF,
        }
    }
}
