//! Reusable UI components

mod badge;
mod button;
mod dialog;
mod field;

pub use badge::{badge, trend_span};
pub use button::{render_button, render_colored_button, render_menu_buttons, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use field::{draw_choice_field, draw_text_field, field_height};
