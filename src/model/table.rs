/// A loosely typed CSV table. Every cell is kept as text; empty cells read as
/// absent through [`Table::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Trimmed, non-empty cell value, or `None` when the column is missing
    /// or the cell is blank.
    #[must_use]
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column(name)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(idx))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the listed columns that exist, in list order.
    #[must_use]
    pub fn project(&self, columns: &[&str]) -> Table {
        let kept: Vec<(usize, &str)> = columns
            .iter()
            .filter_map(|name| self.column(name).map(|idx| (idx, *name)))
            .collect();

        Table {
            headers: kept.iter().map(|(_, name)| (*name).to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| {
                    kept.iter()
                        .map(|(idx, _)| row.get(*idx).cloned().unwrap_or_default())
                        .collect()
                })
                .collect(),
        }
    }
}
