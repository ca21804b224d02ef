pub mod global;
pub mod locale;
pub mod site;
pub mod table;
