pub mod assignment;
pub mod search;

pub use assignment::{Assignment, AssignmentStatus, Game};
pub use search::{
    AssignmentFilters, OrderDirection, Ordering, PageRequest, SearchPage, SearchQuery,
};
