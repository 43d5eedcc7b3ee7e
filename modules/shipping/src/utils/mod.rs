pub mod countries;
pub mod postcode;
