//! Application-level models layered over the generated entities.

pub mod db;
pub mod favorite;
pub mod swapi;
