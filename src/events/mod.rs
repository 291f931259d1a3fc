pub mod keyboard;
pub mod scroll;

pub use keyboard::wire_keyboard;
pub use scroll::{wire_scroll_handlers, InputWiring};
