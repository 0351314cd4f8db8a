pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod progress;
pub mod separator;
pub mod spinner;
pub mod tabs;

// Callers import from here: `use crate::components::ui::Button`.
pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use progress::*;
pub use separator::*;
pub use spinner::*;
pub use tabs::*;
