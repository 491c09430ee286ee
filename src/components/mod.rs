pub mod player_view;

pub use player_view::PlayerView;
