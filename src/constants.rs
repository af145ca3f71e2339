pub const MAX_EDIT_DISTANCE: usize = 3;
pub const SUGGESTION_SLACK: usize = 1;
pub const MAX_SUGGESTIONS: usize = 15;

pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_UTF8_BOM() {
        assert_eq!(UTF8_BOM, "\u{feff}".as_bytes());
    }
}
