mod config;
mod lock;
mod mutex;

pub use config::*;
pub use lock::*;
pub(crate) use mutex::*;
