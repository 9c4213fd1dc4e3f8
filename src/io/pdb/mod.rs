mod reader;
mod writer;

pub use reader::{MIN_ATOM_LINE_WIDTH, decode_atom_line, read as read_structure};
pub use writer::{format_atom_line, write as write_structure};
