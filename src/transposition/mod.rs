pub mod song_sheet;
pub mod text;

pub use song_sheet::{format_and_transpose, format_and_transpose_with, transpose_regions, transpose_song_sheet};
pub use text::{transpose_line, transpose_text, transpose_text_with, transpose_word};
