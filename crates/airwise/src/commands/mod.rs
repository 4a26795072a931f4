pub mod chat;
pub mod classify;
pub mod forecast;
pub mod history;
pub mod status;
pub mod version;
