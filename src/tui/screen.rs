use crate::core::error::Result;
use crate::tui::keys::Command;
use crate::tui::selector::ListView;

/// What the browser needs from a full-screen terminal.
///
/// [`TerminalScreen`](crate::tui::terminal::TerminalScreen) is the real one; tests drive
/// the browser through a scripted implementation.
pub trait Screen {
    /// Draw one page of `view` and return how many item rows fit on screen.
    fn draw(&mut self, view: &ListView) -> Result<usize>;

    /// Block until the next navigation command.
    fn next_command(&mut self) -> Result<Command>;

    /// Hand the terminal back to the shell while `run` executes.
    ///
    /// The screen must be usable again afterwards, whether `run` failed or not.
    fn suspend<T, F>(&mut self, run: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>;
}
