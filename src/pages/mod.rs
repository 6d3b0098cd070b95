pub mod create_product;
pub mod customers;
pub mod edit_product;
pub mod overview;
pub mod products;
pub mod sales;
pub mod shops;
