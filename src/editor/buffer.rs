use ropey::Rope;

/// Spaces inserted for a Tab key press.
pub const TAB_WIDTH: usize = 2;

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in chars.
    pub col: usize,
    /// Column to return to when moving vertically through short lines.
    goal_col: usize,
}

impl Cursor {
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            goal_col: col,
        }
    }

    const fn place(&mut self, line: usize, col: usize) {
        self.line = line;
        self.col = col;
        self.goal_col = col;
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The note text being edited, backed by a rope.
///
/// Columns are char offsets so the cursor can never land inside a
/// multi-byte character. Every mutating call returns whether the text
/// changed, which is the caller's cue to forward [`EditorBuffer::text`]
/// to the session.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl EditorBuffer {
    /// Load `text` with the cursor at the end, ready for appending.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
        };
        buffer.move_to_end();
        buffer
    }

    pub fn empty() -> Self {
        Self::from_text("")
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// A line without its line ending.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Line length in chars, excluding the line ending.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.split_line();
        }
        let idx = self.char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.place(self.cursor.line, self.cursor.col + 1);
        true
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        let idx = self.char_idx() + s.chars().count();
        self.rope.insert(self.char_idx(), s);
        self.place_at_char(idx);
        true
    }

    /// Tab inserts spaces rather than a tab character.
    pub fn insert_tab(&mut self) -> bool {
        self.insert_str(&" ".repeat(TAB_WIDTH))
    }

    /// Break the line at the cursor.
    pub fn split_line(&mut self) -> bool {
        let idx = self.char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.place(self.cursor.line + 1, 0);
        true
    }

    /// Backspace. Joins with the previous line at column 0.
    pub fn delete_back(&mut self) -> bool {
        let idx = self.char_idx();
        if idx == 0 {
            return false;
        }
        self.rope.remove(idx - 1..idx);
        self.place_at_char(idx - 1);
        true
    }

    /// Delete. Joins with the next line at end of line.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..=idx);
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let Cursor { line, col, goal_col } = self.cursor;
        match direction {
            Direction::Left if col > 0 => self.cursor.place(line, col - 1),
            Direction::Left if line > 0 => self.cursor.place(line - 1, self.line_len(line - 1)),
            Direction::Right if col < self.line_len(line) => self.cursor.place(line, col + 1),
            Direction::Right if line + 1 < self.line_count() => self.cursor.place(line + 1, 0),
            Direction::Up if line > 0 => {
                self.cursor.line = line - 1;
                self.cursor.col = goal_col.min(self.line_len(line - 1));
            }
            Direction::Down if line + 1 < self.line_count() => {
                self.cursor.line = line + 1;
                self.cursor.col = goal_col.min(self.line_len(line + 1));
            }
            _ => {}
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.place(self.cursor.line, 0);
    }

    pub fn move_end(&mut self) {
        self.cursor.place(self.cursor.line, self.line_len(self.cursor.line));
    }

    pub const fn move_to_start(&mut self) {
        self.cursor.place(0, 0);
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor.place(last, self.line_len(last));
    }

    /// Place the cursor, clamped to the text.
    #[cfg(test)]
    pub fn move_to(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        self.cursor.place(line, col.min(self.line_len(line)));
    }

    fn char_idx(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.col.min(self.line_len(self.cursor.line))
    }

    fn place_at_char(&mut self, idx: usize) {
        let line = self.rope.char_to_line(idx);
        let col = idx - self.rope.line_to_char(line);
        self.cursor.place(line, col);
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("rope", &format_args!("Rope({} chars)", self.rope.len_chars()))
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_start(text: &str) -> EditorBuffer {
        let mut buf = EditorBuffer::from_text(text);
        buf.move_to_start();
        buf
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_places_cursor_at_end() {
        let buf = EditorBuffer::from_text("one\ntwo!");
        assert_eq!(buf.cursor(), Cursor::at(1, 4));
    }

    #[test]
    fn test_line_at_strips_crlf() {
        let buf = EditorBuffer::from_text("a\r\nb");
        assert_eq!(buf.line_at(0), Some("a".to_string()));
        assert_eq!(buf.line_at(2), None);
    }

    #[test]
    fn test_typing_appends() {
        let mut buf = EditorBuffer::empty();
        for ch in "hello".chars() {
            assert!(buf.insert_char(ch));
        }
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_insert_newline_char_splits() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_to(0, 1);
        buf.insert_char('\n');
        assert_eq!(buf.text(), "a\nb");
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_insert_str_across_lines_moves_cursor() {
        let mut buf = at_start("end");
        buf.insert_str("x\nyz ");
        assert_eq!(buf.text(), "x\nyz end");
        assert_eq!(buf.cursor(), Cursor::at(1, 3));
    }

    #[test]
    fn test_insert_str_empty_reports_no_change() {
        let mut buf = EditorBuffer::from_text("same");
        assert!(!buf.insert_str(""));
    }

    #[test]
    fn test_tab_inserts_two_spaces() {
        let mut buf = at_start("x");
        buf.insert_tab();
        assert_eq!(buf.text(), "  x");
        assert_eq!(buf.cursor().col, 2);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut buf = at_start("abc");
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut buf = EditorBuffer::from_text("café");
        buf.delete_back();
        assert_eq!(buf.text(), "caf");
        assert_eq!(buf.cursor().col, 3);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("abc");
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.delete_forward();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_left_right_wrap_between_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_vertical_moves_remember_goal_column() {
        let mut buf = EditorBuffer::from_text("hello\nhi\nworld");
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down);
        assert_eq!((buf.cursor().line, buf.cursor().col), (1, 2));
        buf.move_cursor(Direction::Down);
        assert_eq!((buf.cursor().line, buf.cursor().col), (2, 4));
    }

    #[test]
    fn test_edges_are_noops() {
        let mut buf = at_start("a\nb");
        buf.move_cursor(Direction::Up);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
        buf.move_to_end();
        buf.move_cursor(Direction::Down);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 1));
    }

    #[test]
    fn test_home_end() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_home();
        assert_eq!(buf.cursor().col, 0);
        buf.move_end();
        assert_eq!(buf.cursor().col, 5);
    }

    #[test]
    fn test_unicode_separators_stay_inside_the_line() {
        let mut buf = EditorBuffer::from_text("ab\u{2028}cd\u{85}e\u{b}\u{c}f");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_len(0), 10);
        buf.move_to(0, 99);
        assert!(buf.insert_char('X'));
        assert_eq!(buf.text(), "ab\u{2028}cd\u{85}e\u{b}\u{c}fX");
        assert_eq!(buf.cursor(), Cursor::at(0, 11));
        assert_eq!(buf.cursor().col, buf.line_len(0));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = EditorBuffer::from_text("abc\nd");
        buf.move_to(9, 9);
        assert_eq!(buf.cursor(), Cursor::at(1, 1));
    }
}
