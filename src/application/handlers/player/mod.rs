//! Player profile handlers.

mod create_profile;
mod get_profile;
mod list_profiles;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler, CreateProfileResult};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_profiles::ListProfilesHandler;
