// App module for pirscope
// Handles application state and business logic

pub mod actions;
pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen, InputState};
