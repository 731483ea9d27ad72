pub mod customer;
pub mod material;
pub mod order;
pub mod stats;
