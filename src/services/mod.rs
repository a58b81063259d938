pub mod backend;
pub mod form;
pub mod phone;
pub mod validation;
