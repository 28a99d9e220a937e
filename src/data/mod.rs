//! Data module - CSV loading and header cleaning

mod cleaner;
mod loader;

pub use cleaner::HeaderCleaner;
pub use loader::DataLoader;
