/// A cursor for character-by-character inline scanning.
///
/// Positions are byte offsets into `s` and always sit on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Returns the char immediately before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Returns the char at byte offset `at`, if any.
    pub fn char_at(&self, at: usize) -> Option<char> {
        self.s.get(at..)?.chars().next()
    }

    /// Finds `pat` at or after byte offset `from`, returning its absolute offset.
    pub fn find_from(&self, from: usize, pat: char) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|rel| from + rel)
    }

    /// Advances by one char, returning the consumed char.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves the cursor to byte offset `i`.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert!(!cur.eof());
        assert_eq!(cur.prev(), None);
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.prev(), Some('h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn bump_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("é_");
        assert_eq!(cur.bump(), Some('é'));
        assert_eq!(cur.i, 2);
        assert_eq!(cur.peek(), Some('_'));
        assert_eq!(cur.prev(), Some('é'));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some('x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }

    #[test]
    fn find_from_returns_absolute_offset() {
        let cur = Cursor::new("a*b*c");
        assert_eq!(cur.find_from(2, '*'), Some(3));
        assert_eq!(cur.find_from(4, '*'), None);
    }

    #[test]
    fn char_at_past_end_is_none() {
        let cur = Cursor::new("ab");
        assert_eq!(cur.char_at(1), Some('b'));
        assert_eq!(cur.char_at(2), None);
    }
}
