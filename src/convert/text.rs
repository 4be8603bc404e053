/// Left-pad a zip code with zeros to the canonical five characters. Upstream
/// tooling strips leading zeros, so "121" means "00121". Values already five
/// characters or longer pass through untouched.
pub fn format_zip(zip: &str) -> String {
    format!("{zip:0>5}")
}

/// Upper-case a name using locale-independent Unicode case mapping.
pub fn format_full_name(name: &str) -> String {
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_zips_to_five_digits() {
        assert_eq!(format_zip("121"), "00121");
        assert_eq!(format_zip("1"), "00001");
        assert_eq!(format_zip(""), "00000");
    }

    #[test]
    fn five_digit_zips_pass_through() {
        assert_eq!(format_zip("94121"), "94121");
    }

    #[test]
    fn long_zips_are_never_truncated() {
        assert_eq!(format_zip("941211234"), "941211234");
    }

    #[test]
    fn zip_padding_is_idempotent() {
        assert_eq!(format_zip(&format_zip("42")), format_zip("42"));
    }

    #[test]
    fn upper_cases_names() {
        assert_eq!(format_full_name("Monkey Alberto"), "MONKEY ALBERTO");
    }

    #[test]
    fn upper_casing_is_unicode_aware() {
        assert_eq!(format_full_name("Björk Guðmundsdóttir"), "BJÖRK GUÐMUNDSDÓTTIR");
        assert_eq!(format_full_name("株式会社スタジオジブリ"), "株式会社スタジオジブリ");
    }

    #[test]
    fn name_formatting_is_idempotent() {
        let once = format_full_name("Superman übertan");
        assert_eq!(format_full_name(&once), once);
    }
}
