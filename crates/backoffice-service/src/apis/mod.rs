//! Handler modules for the backoffice API.

pub mod orders;
