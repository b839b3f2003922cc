//! Native Dateidialoge.

mod file_dialogs;

pub use file_dialogs::handle_file_dialogs;
