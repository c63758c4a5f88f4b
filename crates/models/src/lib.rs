//! Typed data model for artist records.
//! - `artist`: profile, artworks and 3D models owned by one user.
//! - `collection`: the `userId -> record` map persisted as one JSON blob.
//! - `item`: tagged selector over the two deletable sequences.

pub mod errors;
pub mod artist;
pub mod collection;
pub mod item;

pub use artist::{ArtistRecord, Artwork, Model3d, Profile};
pub use collection::ArtistCollection;
pub use item::ItemKind;
