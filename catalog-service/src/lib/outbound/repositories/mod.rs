pub mod category;
pub mod memory;
pub mod product;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use memory::InMemoryCategoryRepository;
pub use memory::InMemoryProductRepository;
pub use memory::InMemoryUserRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;
