pub mod now_playing;
pub mod response;
pub mod track;

pub use now_playing::CurrentTrack;
pub use response::SearchResponse;
pub use track::SearchResult;
