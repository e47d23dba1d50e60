pub mod get_import;
pub mod get_osm_element;
pub mod get_survey;

pub use get_import::*;
pub use get_osm_element::*;
pub use get_survey::*;
