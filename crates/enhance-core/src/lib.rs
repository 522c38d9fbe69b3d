pub mod background;
pub mod constants;
pub mod debounce;
pub mod line_numbers;
pub mod schedule;
pub mod sidebar;
pub mod spotlight;
pub mod styles;

pub use background::*;
pub use constants::*;
pub use debounce::*;
pub use schedule::*;
pub use sidebar::*;
pub use spotlight::*;
