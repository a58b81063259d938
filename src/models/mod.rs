pub mod booking;
pub mod catalog;
pub mod form;

pub use booking::{BookingRequest, BookingResponse, Confirmation, SlotsResponse};
pub use catalog::{SelectOption, Service};
pub use form::{FormEvent, FormFields, FormPhase};
