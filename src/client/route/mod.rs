pub mod admin;
pub mod game_detail;
pub mod games;
pub mod home;
pub mod login;
pub mod not_found;

pub use game_detail::GameDetail;
pub use games::Games;
pub use home::Home;
pub use login::{Login, Register};
pub use not_found::NotFound;
