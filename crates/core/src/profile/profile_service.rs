use std::sync::{Arc, RwLock};

use log::{debug, info};

use crate::errors::{Error, Result, ValidationError};
use crate::notifications::{Notice, NotificationSink};

use super::profile_model::{PasswordChange, Profile};
use super::profile_traits::ProfileServiceTrait;

/// In-memory profile store.
pub struct ProfileService {
    profile: RwLock<Profile>,
    sink: Arc<dyn NotificationSink>,
}

impl ProfileService {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_profile(Profile::default(), sink)
    }

    pub fn with_profile(profile: Profile, sink: Arc<dyn NotificationSink>) -> Self {
        ProfileService {
            profile: RwLock::new(profile),
            sink,
        }
    }
}

impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self) -> Result<Profile> {
        self.profile
            .read()
            .map(|p| p.clone())
            .map_err(|_| Error::Unexpected("profile lock poisoned".to_string()))
    }

    fn save_profile(&self, profile: Profile) -> Result<(Profile, Notice)> {
        {
            let mut current = self
                .profile
                .write()
                .map_err(|_| Error::Unexpected("profile lock poisoned".to_string()))?;
            *current = profile.clone();
        }
        info!("Profile saved for {}", profile.name);

        let notice = Notice::info(
            "Profile Updated",
            "Your profile settings have been saved successfully.",
        );
        self.sink.notify(notice.clone());
        Ok((profile, notice))
    }

    fn change_password(&self, passwords: &mut PasswordChange) -> Result<Notice> {
        if !passwords.matches() {
            debug!("Password change rejected: confirmation does not match");
            self.sink.notify(Notice::destructive(
                "Password Mismatch",
                "New passwords don't match. Please try again.",
            ));
            return Err(ValidationError::PasswordMismatch.into());
        }

        passwords.clear();
        let notice = Notice::info(
            "Password Updated",
            "Your password has been changed successfully.",
        );
        self.sink.notify(notice.clone());
        Ok(notice)
    }
}
