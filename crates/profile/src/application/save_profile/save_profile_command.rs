// crates/profile/src/application/save_profile/save_profile_command.rs

use serde::Deserialize;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::models::CandidateProfile;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveProfileCommand {
    pub user_id: UserId,
    pub profile: CandidateProfile,
}
