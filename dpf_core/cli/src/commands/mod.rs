mod check;
mod render;

pub use check::{handle_check, CheckArgs};
pub use render::{handle_render, RenderArgs};
