pub mod components;
pub mod error;
pub mod loader;

pub use components::global::{TaskAdminConfig, TaskAdminFileConfig};
pub use components::locale::{LocaleConfig, StringOverrides};
pub use components::site::{EndpointPaths, ParamNaming, SiteConfig};
pub use components::table::TableConfig;
pub use error::ConfigError;
