/// Selection over the card grid. Cards are laid out row-major, `columns` wide.
pub struct ResultsGrid {
    pub selected: Option<usize>,
    /// Set by the renderer from the available width
    pub columns: usize,
}

impl Default for ResultsGrid {
    fn default() -> Self {
        Self {
            selected: None,
            columns: 2,
        }
    }
}

impl ResultsGrid {
    /// Drop the selection, or pick the first card when there are any
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
    }

    pub fn select_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i + self.step() < total => i + self.step(),
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn select_up(&mut self) {
        let i = match self.selected {
            Some(i) if i >= self.step() => i - self.step(),
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(i);
    }

    /// True when the selection sits in the top row (moving up leaves the grid)
    pub fn on_top_row(&self) -> bool {
        self.selected.map_or(true, |i| i < self.step())
    }

    /// Keep the selection inside a result list that may have shrunk
    pub fn clamp(&mut self, total: usize) {
        self.selected = match self.selected {
            _ if total == 0 => None,
            Some(i) => Some(i.min(total - 1)),
            None => None,
        };
    }

    fn step(&self) -> usize {
        self.columns.max(1)
    }
}
