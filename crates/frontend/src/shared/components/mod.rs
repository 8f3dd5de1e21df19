pub mod autocomplete;
pub mod error_banner;
