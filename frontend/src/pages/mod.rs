pub mod session;
pub mod welcome;
