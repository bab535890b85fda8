//! Terminal presentation for the duel client.
pub mod event_loop;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
