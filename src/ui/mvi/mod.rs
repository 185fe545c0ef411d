//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of screen state (search, poster loading, history) is a
//! value transformed by a pure reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing what to render
//! - **Intent**: key press or background outcome (catalog page, poster decode)
//! - **Reducer**: `(State, Intent) -> State`, no side effects

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
