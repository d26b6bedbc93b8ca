pub mod account;
pub mod address;
pub mod cart;
pub mod order;

pub use account::*;
pub use address::*;
pub use cart::*;
pub use order::*;
