pub mod admin_service;
pub mod contact_service;
pub mod property_service;
