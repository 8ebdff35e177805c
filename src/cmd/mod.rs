pub mod grid;
pub mod init;
pub mod moods;
pub mod root;
