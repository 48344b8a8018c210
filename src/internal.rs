pub mod downloader;
pub mod entrance;
pub mod utils;
