pub mod greeting;

pub use greeting::{GreetQuery, Greeting};
