pub mod log_setup;
pub mod string_ext;

pub use string_ext::{find_substring, CaseSensitivity, FindSubstring};
