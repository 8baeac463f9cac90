pub mod fs_helpers;
pub mod text_parsing;
pub mod word_stemming;
