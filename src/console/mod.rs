//! Terminal front end: renders events as text and reads moves from a line stream.

mod play;
mod presenter;

pub use play::{PlayEnd, play_completion, play_matching};
pub use presenter::{ConsolePresenter, render_word};
