pub mod working_list;

pub use working_list::{SaveOutcome, WorkingList};

/// An entity held in a working list: addressable by id and filterable by status.
pub trait Record {
    fn id(&self) -> &str;
    fn is_featured(&self) -> bool;
}
