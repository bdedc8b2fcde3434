//! The button family.

mod button;
mod check_button;
mod confirm_button;
mod input_button;
mod keybind_button;

pub use button::Button;
pub use check_button::CheckButton;
pub use confirm_button::ConfirmButton;
pub use input_button::InputButton;
pub use keybind_button::KeybindButton;
