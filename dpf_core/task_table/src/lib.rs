pub mod clock;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod table_id;
pub mod tabular;
pub mod task_table;
mod templates;
pub mod urls;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RenderError;
pub use i18n::{Localizer, StringCatalog};
pub use icons::{Icon, IconResolver, ThemeIconResolver};
pub use table_id::{TableId, TableIdContext};
pub use task_table::{Collaborators, TaskTable, DEFAULT_TABLE_CLASS};
pub use urls::{SiteUrlBuilder, TaskEndpoint, UrlBuilder};
