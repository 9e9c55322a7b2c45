pub mod contact;
pub mod property;
