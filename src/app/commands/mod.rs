pub mod list;
pub mod replicate;
pub mod sync;
pub mod workdir;
