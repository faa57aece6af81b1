//! Response bodies that bridge services with templates and the JSON API.

pub mod api;
pub mod pages;
