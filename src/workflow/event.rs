/// User actions fed to the workflow by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Append a character to the program name being typed
    Char(char),
    Backspace,
    /// Submit a program name
    Submit(String),
    Up,
    Down,
    /// Move the cursor straight to a candidate index
    Focus(usize),
    /// Select or deselect the candidate under the cursor
    Toggle,
    /// Ask to delete the current selection
    Delete,
    /// Answer to the deletion prompt
    Confirm(bool),
    Back,
    /// Quit from any screen
    Cancel,
}
