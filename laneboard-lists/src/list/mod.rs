//! List commands

mod create;
mod fetch;
mod get;

pub use create::CreateList;
pub use fetch::FetchLists;
pub use get::GetList;
