pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod string_builder;
