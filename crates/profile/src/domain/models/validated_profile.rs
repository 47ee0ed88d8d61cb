// crates/profile/src/domain/models/validated_profile.rs

use serde::Serialize;
use crate::domain::value_objects::{Gender, LookingFor};

/// Profil normalisé ayant passé toutes les règles de sauvegarde.
///
/// Seul le validateur peut en construire un.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedProfile {
    pub(crate) name: String,
    pub(crate) age: u32,
    pub(crate) bio: String,
    pub(crate) gender: Gender,
    pub(crate) looking_for: LookingFor,
    pub(crate) city: String,
    pub(crate) photo_urls: Vec<String>,
}

impl ValidatedProfile {
    pub(crate) fn new(
        name: String,
        age: u32,
        bio: String,
        gender: Gender,
        looking_for: LookingFor,
        city: String,
        photo_urls: Vec<String>,
    ) -> Self {
        Self { name, age, bio, gender, looking_for, city, photo_urls }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn age(&self) -> u32 { self.age }
    pub fn bio(&self) -> &str { &self.bio }
    pub fn gender(&self) -> Gender { self.gender }
    pub fn looking_for(&self) -> LookingFor { self.looking_for }
    pub fn city(&self) -> &str { &self.city }
    pub fn photo_urls(&self) -> &[String] { &self.photo_urls }
}
