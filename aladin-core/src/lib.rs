pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod gesture;
pub mod header;
pub mod i18n;
pub mod keys;
pub mod load;
pub mod navigation;
pub mod probe;
pub mod run;
pub mod transform;
pub mod url;
