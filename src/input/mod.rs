pub mod token;

pub use token::{InputToken, Selection};
