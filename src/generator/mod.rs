//! Playlist generation engine

pub mod convert;
pub mod engine;
pub mod scan;
pub mod search;
pub mod writer;

pub use convert::M3uConverter;
pub use engine::Generator;
pub use search::SearchPlaylistBuilder;
pub use writer::PlaylistWriter;
