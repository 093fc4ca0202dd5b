use clap::ValueEnum;

use crate::store::Record;

/// Three-way status toggle shared by the blog and course tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Featured,
    Regular,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Featured,
        StatusFilter::Regular,
    ];

    pub fn matches(self, featured: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Featured => featured,
            StatusFilter::Regular => !featured,
        }
    }

    pub fn index(self) -> usize {
        match self {
            StatusFilter::All => 0,
            StatusFilter::Featured => 1,
            StatusFilter::Regular => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Featured,
            StatusFilter::Featured => StatusFilter::Regular,
            StatusFilter::Regular => StatusFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Regular,
            StatusFilter::Featured => StatusFilter::All,
            StatusFilter::Regular => StatusFilter::Featured,
        }
    }
}

/// Keep the records whose `featured` flag matches `mode`, in their original order.
pub fn filter<T: Record>(records: &[T], mode: StatusFilter) -> Vec<&T> {
    records
        .iter()
        .filter(|record| mode.matches(record.is_featured()))
        .collect()
}
