// Selection helpers
pub mod select;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use select::select_one;
pub use json_converter::value_to_short_string;
