pub mod platform;
pub mod product;
pub mod region;
pub mod store;

pub use platform::Platform;
pub use product::Product;
pub use region::{City, State};
pub use store::Store;
