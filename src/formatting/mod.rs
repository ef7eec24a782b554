pub mod digest;

pub use digest::{format_chat_digest, format_terminal_digest};
