//! Database fixtures grouped by area of the catalog.
//!
//! - `factory` - pure model constructors with standard test values
//! - `world` - planets, species, characters and their lookup tables
//! - `media` - films, craft, people, manufacturers and their association rows
//! - `user` - user accounts and favorites

pub mod factory;
pub mod media;
pub mod user;
pub mod world;
