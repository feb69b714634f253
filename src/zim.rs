// Zim Desktop Wiki pages (plain text, wiki format 0.6)

pub mod renderer;
pub mod writer;
