pub mod guard;
pub mod http;
pub mod search;

pub use search::{
    fetch_all_assignment_pages, AssignmentSearch, MAX_FETCH_ALL_PAGES, PAGE_SIZE,
};
