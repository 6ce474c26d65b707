pub mod bookings;
pub mod clients;
pub mod print_orders;
pub mod print_products;
pub mod services;
