pub mod api_utils;
pub mod export;
pub mod page_frame;
pub mod page_standard;
