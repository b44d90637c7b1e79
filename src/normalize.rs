pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_normalization() {
        assert_eq!(normalize("hello\r\nworld"), "hello\nworld");
    }

    #[test]
    fn test_cr_normalization() {
        assert_eq!(normalize("hello\rworld"), "hello\nworld");
    }

    #[test]
    fn test_lf_untouched() {
        assert_eq!(normalize("hello\nworld"), "hello\nworld");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
