pub mod init;
pub mod rename;
