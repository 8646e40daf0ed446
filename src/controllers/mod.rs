pub mod music;
pub mod root;
pub use music::MusicController;
pub use root::RootController;
