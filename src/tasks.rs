pub mod downloader;
pub mod pagination;
pub mod raw_json;
