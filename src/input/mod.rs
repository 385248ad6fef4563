//! Input handling and key bindings
//!
//! The input system uses a stack-based handler architecture: modal line
//! entry (text, rate, voice number, save path) pushes a handler that
//! intercepts keys until it accepts or cancels.

pub mod buffer_handler;
pub mod default_handler;
pub mod handler;
pub mod keymap;

pub use buffer_handler::BufferHandler;
pub use default_handler::DefaultKeyHandler;
pub use handler::{HandlerAction, HandlerStack, KeyHandler};
pub use keymap::{create_default_keymap, KeyAction};
