pub mod classify;
pub mod config;
pub mod ics;
pub mod inspect;
pub mod link;
pub mod open;
