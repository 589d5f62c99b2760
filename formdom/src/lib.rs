pub mod element;
pub mod query;
pub mod render;
pub mod text;

pub use element::{find_element, walk, Content, Direction, Element, Kind, Role};
pub use query::{By, QueryError, TextMatch};
