mod episode;
mod home;

pub use episode::EpisodeView;
pub use home::HomeView;
