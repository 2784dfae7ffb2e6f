//! Transcript lexing and block construction.

mod builder;
mod lexer;
mod linker;

pub use builder::build_block;
pub use lexer::{filter_conversations, split_conversations, CONTINUATION_MARK};
pub use linker::link_block;
