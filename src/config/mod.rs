//! Configuration module

mod site;

pub use site::NavLink;
pub use site::SiteConfig;
pub use site::ThemeDefault;
