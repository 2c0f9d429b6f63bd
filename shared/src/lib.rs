pub mod state;

pub use state::{init_state, AppState};
