pub mod config;
pub mod database;
pub mod music_info;
pub mod song;

pub use music_info::Service as MusicInfoService;
pub use song::Service as SongService;
