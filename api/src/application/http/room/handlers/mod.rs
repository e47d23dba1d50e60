pub mod get_room;
pub mod list_intersecting_rooms;
pub mod search_rooms;

pub use get_room::*;
pub use list_intersecting_rooms::*;
pub use search_rooms::*;
