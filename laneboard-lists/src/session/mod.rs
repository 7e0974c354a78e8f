//! Session commands and the auth subscription watcher

mod logout;
mod watcher;

pub use logout::Logout;
pub use watcher::spawn_session_watcher;
