pub mod handler;

pub use handler::run_screen;
