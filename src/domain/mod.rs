pub mod product;
pub mod seller;
pub mod user;

pub use product::{CreateProductRequest, Product};
pub use seller::{Brand, CreateSellerRequest, Seller, SellerStatus, UpdateSellerRequest};
pub use user::{CreateUserRequest, LoginRequest, LoginResponse, User};
