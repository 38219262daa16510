use chrono::{Local, NaiveDate};

/// Knobs for [`process_table`](crate::process_table).
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Date whose year and month stand in for an unreadable period.
    /// `None` means today's local date, read once per batch.
    pub reference_date: Option<NaiveDate>,
    /// Normalize rows on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            reference_date: None,
            parallel: true,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn effective_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
