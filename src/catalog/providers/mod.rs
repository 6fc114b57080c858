pub mod file;
pub mod http;

pub use file::FileTemplateProvider;
pub use http::HttpTemplateProvider;
