//! Data models shared between the server and clients

pub mod brand;
pub mod landing_page;
pub mod records;
pub mod user;

pub use brand::*;
pub use landing_page::*;
pub use records::*;
pub use user::*;
