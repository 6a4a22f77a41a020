pub mod event;
pub mod input;
pub mod mode;
pub mod state;

pub use input::InputBuffer;
pub use mode::Mode;
pub use state::AppState;
