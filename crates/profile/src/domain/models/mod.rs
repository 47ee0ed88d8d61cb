mod candidate_profile;
mod validated_profile;

pub use candidate_profile::CandidateProfile;
pub use validated_profile::ValidatedProfile;
