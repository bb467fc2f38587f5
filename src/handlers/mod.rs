pub mod driver;
pub mod race;
pub mod session;
pub mod tracks;
