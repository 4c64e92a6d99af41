pub mod category;
pub mod pagination;
pub mod product;
pub mod user;
