use coverage::CoverageRow;

/// Coverage rows in input order, loaded once per run.
#[derive(Debug, Default, Clone)]
pub struct CoverageTable {
    pub rows: Vec<CoverageRow>,
}

impl CoverageTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: CoverageRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoverageRow> {
        self.rows.iter()
    }
}

impl FromIterator<CoverageRow> for CoverageTable {
    fn from_iter<I: IntoIterator<Item = CoverageRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CoverageTable {
    type Item = CoverageRow;
    type IntoIter = std::vec::IntoIter<CoverageRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
