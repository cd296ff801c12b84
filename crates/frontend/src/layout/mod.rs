pub mod header;
pub mod loading;

pub use header::Header;
pub use loading::LoadingScreen;
