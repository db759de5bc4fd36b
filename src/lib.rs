pub mod commands;
pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod tui;
pub mod types;
pub mod view_link;

pub use config::Config;
pub use directory::{GroupDirectory, GroupPage, GroupQuery, PageInfo, SharedDirectory};
pub use error::{GroupdeckError, Result};
pub use types::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FilterState, GroupRecord, LookupSets, PAGE_SIZE_CHOICES,
    PHONE_ALL, PaginationState,
};
pub use view_link::ViewLink;
