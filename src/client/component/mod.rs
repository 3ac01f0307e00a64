pub mod game_card;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;

pub use game_card::{GameCard, StatCard};
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorAlert, ErrorPage, Loading, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::RequiresAdmin;
