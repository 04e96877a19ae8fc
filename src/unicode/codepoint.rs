/// Returns true if the code point falls in one of the Myanmar blocks.
pub fn is_script_char(code_point: u32) -> bool {
    match code_point {
        // Myanmar
        0x1000..=0x109F => true,
        // Myanmar Extended-A
        0xAA60..=0xAA7B => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_script_char() {
        assert!(is_script_char(0x1000));
        assert!(is_script_char(0x109F));
        assert!(is_script_char(0xAA60));
        assert!(is_script_char(0xAA7B));
        assert!(!is_script_char(0x0FFF));
        assert!(!is_script_char(0x10A0));
        assert!(!is_script_char(0xAA7C));
        assert!(!is_script_char(0));
    }
}
