// crates/profile/src/domain/models/candidate_profile.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Gender, LookingFor};

/// Saisie brute du formulaire d'édition, reconstruite à chaque tentative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: String,
    pub age: String,
    pub bio: String,
    pub gender: Gender,
    pub looking_for: LookingFor,
    pub city: String,
    /// Ordre d'affichage, la première est la photo principale
    pub photo_urls: Vec<String>,
}

impl CandidateProfile {
    pub fn new(name: impl Into<String>, age: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            bio: bio.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self { self.gender = gender; self }
    pub fn with_looking_for(mut self, looking_for: LookingFor) -> Self { self.looking_for = looking_for; self }
    pub fn with_city(mut self, city: impl Into<String>) -> Self { self.city = city.into(); self }
    pub fn with_photo_urls(mut self, urls: Vec<String>) -> Self { self.photo_urls = urls; self }
}
