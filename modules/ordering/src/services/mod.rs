pub mod order_create;
pub mod order_status;
