pub mod field;
pub mod form;
pub mod question;
pub mod response;
pub mod theme;
