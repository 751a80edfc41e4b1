pub mod notify;
pub mod phone;
