use console::Term;

pub const NO_EXTENSION: &str = "(none)";

pub const DEFAULT_TERM_WIDTH: usize = 80;

/// Extension key for a path: the segment after the last `.` in the file
/// name, or the sentinel key when there is none.
pub fn ext_key(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => NO_EXTENSION,
    }
}

/// Detected terminal width, falling back to a fixed default when stdout is
/// not a terminal.
pub fn term_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_TERM_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ext_key_takes_last_dot_segment() {
        assert_eq!(ext_key("foo/bar.baz"), "baz");
        assert_eq!(ext_key("foo/bar.tar.gz"), "gz");
        assert_eq!(ext_key("foo/.baz"), "baz");
    }

    #[test]
    fn ext_key_uses_sentinel_without_dot() {
        assert_eq!(ext_key("foo/bar"), NO_EXTENSION);
        assert_eq!(ext_key("Makefile"), NO_EXTENSION);
    }

    #[test]
    fn ext_key_ignores_dots_in_directories() {
        assert_eq!(ext_key("foo.d/bar"), NO_EXTENSION);
    }
}
