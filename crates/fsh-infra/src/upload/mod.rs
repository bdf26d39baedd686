mod fs_file;
mod memory;

pub use fs_file::FsUploadFile;
pub use memory::MemoryUploadFile;
