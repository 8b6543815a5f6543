//! Configuration module

mod site;

pub use site::LinkConfig;
pub use site::SiteConfig;
