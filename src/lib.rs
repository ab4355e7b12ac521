pub mod booking;
pub mod chat;
pub mod config;
pub mod knowledge;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
