use unicode_width::UnicodeWidthStr;

/// Search box state for the TUI. The text itself lives in the session's
/// `ViewState::query`; this tracks where the cursor is and who has focus.
pub struct SearchInput {
    /// Byte offset into the query, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchInput {
    pub fn insert(&mut self, query: &mut String, c: char) {
        self.clamp(query);
        query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self, query: &mut String) {
        self.clamp(query);
        if self.cursor_pos > 0 {
            let prev = prev_boundary(query, self.cursor_pos);
            query.remove(prev);
            self.cursor_pos = prev;
        }
    }

    pub fn delete(&mut self, query: &mut String) {
        self.clamp(query);
        if self.cursor_pos < query.len() {
            query.remove(self.cursor_pos);
        }
    }

    pub fn move_left(&mut self, query: &str) {
        self.clamp(query);
        if self.cursor_pos > 0 {
            self.cursor_pos = prev_boundary(query, self.cursor_pos);
        }
    }

    pub fn move_right(&mut self, query: &str) {
        self.clamp(query);
        if self.cursor_pos < query.len() {
            self.cursor_pos = query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(query.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self, query: &str) {
        self.cursor_pos = query.len();
    }

    /// Terminal columns between the start of the query and the cursor
    pub fn cursor_column(&self, query: &str) -> u16 {
        let end = self.cursor_pos.min(query.len());
        query.get(..end).map(|s| s.width()).unwrap_or(0) as u16
    }

    fn clamp(&mut self, query: &str) {
        if self.cursor_pos > query.len() || !query.is_char_boundary(self.cursor_pos) {
            self.cursor_pos = query.len();
        }
    }
}

fn prev_boundary(query: &str, pos: usize) -> usize {
    query[..pos]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> (SearchInput, String) {
        let mut input = SearchInput::default();
        let mut query = String::new();
        for c in text.chars() {
            input.insert(&mut query, c);
        }
        (input, query)
    }

    #[test]
    fn typing_appends_and_advances() {
        let (input, query) = typed("ai");
        assert_eq!(query, "ai");
        assert_eq!(input.cursor_pos, 2);
        assert!(input.focused);
    }

    #[test]
    fn insert_in_the_middle() {
        let (mut input, mut query) = typed("mchine");
        input.home();
        input.move_right(&query);
        input.insert(&mut query, 'a');
        assert_eq!(query, "machine");
        assert_eq!(input.cursor_pos, 2);
    }

    #[test]
    fn backspace_and_delete_respect_multibyte_chars() {
        let (mut input, mut query) = typed("café!");
        input.backspace(&mut query);
        assert_eq!(query, "café");
        input.backspace(&mut query);
        assert_eq!(query, "caf");

        input.home();
        input.delete(&mut query);
        assert_eq!(query, "af");
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn backspace_at_start_is_ignored() {
        let (mut input, mut query) = typed("x");
        input.home();
        input.backspace(&mut query);
        assert_eq!(query, "x");
    }

    #[test]
    fn left_right_walk_char_boundaries() {
        let (mut input, query) = typed("aé");
        input.move_left(&query);
        assert_eq!(input.cursor_pos, 1);
        input.move_right(&query);
        assert_eq!(input.cursor_pos, 3);
        input.move_right(&query);
        assert_eq!(input.cursor_pos, 3);
    }

    #[test]
    fn cursor_column_uses_display_width() {
        let (input, query) = typed("日本");
        assert_eq!(input.cursor_pos, 6);
        assert_eq!(input.cursor_column(&query), 4);
    }

    #[test]
    fn stale_cursor_is_clamped_after_external_edit() {
        let (mut input, mut query) = typed("technology");
        query.truncate(4);
        input.insert(&mut query, 's');
        assert_eq!(query, "techs");
    }
}
