mod fs_store;
mod memory;
mod quota;

pub use fs_store::FsFontStore;
pub use memory::InMemoryFontStore;
pub use quota::{DirQuotaEstimator, StaticQuota};
