pub mod api_utils;
pub mod components;
pub mod file_reader;
pub mod icons;
pub mod notice;
