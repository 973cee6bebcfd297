use crate::errors::Result;
use crate::notifications::Notice;

use super::profile_model::{PasswordChange, Profile};

/// Trait for profile service operations
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self) -> Result<Profile>;
    fn save_profile(&self, profile: Profile) -> Result<(Profile, Notice)>;
    fn change_password(&self, passwords: &mut PasswordChange) -> Result<Notice>;
}
