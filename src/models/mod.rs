pub mod account;
pub mod dto;
pub mod error;
pub use account::{Account, NewAccount};
pub use error::{Error, Result};
