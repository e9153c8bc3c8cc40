pub mod form;
pub mod handlers;
pub mod models;
pub mod skills;
pub mod storage;
pub mod validation;
