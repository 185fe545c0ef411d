pub mod app;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pagination;
pub mod poster;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
