pub mod post_file;

pub use post_file::PostFile;
