//! Player module - profiles, slugs, and the owner access check.

mod access;
mod profile;
mod slug;

pub use access::authorize_owner;
pub use profile::PlayerProfile;
pub use slug::Slug;
