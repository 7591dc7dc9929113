mod completer;
mod editor;
mod parser;
mod reader;

pub use completer::ShellCompleter;
pub use editor::EditorInput;
pub use parser::{Command, BACKGROUND_MARKER};
pub use reader::{BufReadInput, LineReader};
