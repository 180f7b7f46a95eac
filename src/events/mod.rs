mod pointer;
mod window;

pub use pointer::{wire_pointer, Dispatcher};
pub use window::{wire_audio_unlock, wire_error_reporting, wire_resize};
