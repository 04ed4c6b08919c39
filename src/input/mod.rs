mod completer;
mod console;
pub mod tokenizer;

pub use completer::ShellHelper;
pub use console::{Console, SharedBuffer};
pub use tokenizer::{tokenize, tokens, Tokens};
