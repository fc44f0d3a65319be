pub mod chat;
pub mod init;
pub mod menu;
pub mod serve;
pub mod status;
