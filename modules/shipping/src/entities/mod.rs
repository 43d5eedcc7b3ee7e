pub mod cart;
pub mod method;
pub mod rate;
pub mod zone;
