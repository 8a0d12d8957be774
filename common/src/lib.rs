//! Request and response types exchanged between the minesweeper server and
//! its clients.

pub mod models;
