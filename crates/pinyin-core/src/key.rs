//! Integer key codes delivered by the on-screen keyboard.
//!
//! Values follow the widget toolkit's key enumeration so taps can be forwarded
//! to a focused target without translation.

/// No associated key (used for synthetic per-character text delivery).
pub const NONE: u32 = 0;
pub const SPACE: u32 = 0x20;
pub const DIGIT_0: u32 = 0x30;
pub const LETTER_A: u32 = 0x41;

pub const TAB: u32 = 0x0100_0001;
pub const BACKSPACE: u32 = 0x0100_0003;
pub const RETURN: u32 = 0x0100_0004;
/// Keypad enter.
pub const ENTER: u32 = 0x0100_0005;
pub const CAPS_LOCK: u32 = 0x0100_0024;
/// Chinese / Latin language switch.
pub const MODE_SWITCH: u32 = 0x0100_117E;

pub fn is_return(key_code: u32) -> bool {
    key_code == RETURN || key_code == ENTER
}

/// Key code of an ASCII letter or digit key, case-insensitive.
pub fn for_char(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(LETTER_A + (c as u32 - 'a' as u32)),
        'A'..='Z' => Some(LETTER_A + (c as u32 - 'A' as u32)),
        '0'..='9' => Some(DIGIT_0 + (c as u32 - '0' as u32)),
        ' ' => Some(SPACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_and_digit_codes() {
        assert_eq!(for_char('a'), Some(0x41));
        assert_eq!(for_char('Z'), Some(0x5A));
        assert_eq!(for_char('0'), Some(0x30));
        assert_eq!(for_char('9'), Some(0x39));
        assert_eq!(for_char(' '), Some(SPACE));
        assert_eq!(for_char('你'), None);
    }

    #[test]
    fn return_and_keypad_enter() {
        assert!(is_return(RETURN));
        assert!(is_return(ENTER));
        assert!(!is_return(SPACE));
    }
}
