//! HTTP protocol layer module
//!
//! Provides response builders shared by every route handler.

pub mod response;

// Re-export commonly used items
pub use response::{
    build_404_response, build_413_response, build_error_response, build_json_response,
    build_result_response, build_text_response, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT,
};
