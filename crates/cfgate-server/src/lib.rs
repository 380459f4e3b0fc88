pub mod server;

pub use server::{ConfigServer, router};
