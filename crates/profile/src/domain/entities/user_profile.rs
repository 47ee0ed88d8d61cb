// crates/profile/src/domain/entities/user_profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::models::{CandidateProfile, ValidatedProfile};
use crate::domain::validation::{validate_profile_for_save, ValidationConfig};
use crate::domain::value_objects::{Gender, LookingFor};

/// Document profil stocké par utilisateur (un par `uid`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub uid: UserId,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub gender: Gender,
    pub looking_for: LookingFor,
    pub photo_urls: Vec<String>,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Document quasi vide créé juste après l'inscription.
    /// Il sera complété depuis l'écran d'édition.
    pub fn new_initial(uid: UserId, now: DateTime<Utc>) -> Self {
        Self {
            uid,
            name: String::new(),
            age: 0,
            bio: String::new(),
            gender: Gender::default(),
            looking_for: LookingFor::default(),
            photo_urls: Vec::new(),
            city: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applique un profil validé. Retourne `false` si rien n'a changé.
    pub fn apply(&mut self, validated: ValidatedProfile, now: DateTime<Utc>) -> bool {
        let unchanged = self.name == validated.name
            && self.age == validated.age
            && self.bio == validated.bio
            && self.gender == validated.gender
            && self.looking_for == validated.looking_for
            && self.city == validated.city
            && self.photo_urls == validated.photo_urls;

        if unchanged {
            return false;
        }

        self.name = validated.name;
        self.age = validated.age;
        self.bio = validated.bio;
        self.gender = validated.gender;
        self.looking_for = validated.looking_for;
        self.city = validated.city;
        self.photo_urls = validated.photo_urls;
        self.updated_at = now;

        true
    }

    /// Pré-remplissage du formulaire d'édition (un âge à 0 s'affiche vide).
    pub fn to_candidate(&self) -> CandidateProfile {
        CandidateProfile {
            name: self.name.clone(),
            age: if self.age > 0 { self.age.to_string() } else { String::new() },
            bio: self.bio.clone(),
            gender: self.gender,
            looking_for: self.looking_for,
            city: self.city.clone(),
            photo_urls: self.photo_urls.clone(),
        }
    }

    /// Le document passerait-il la validation de sauvegarde tel quel ?
    pub fn is_complete(&self, config: &ValidationConfig) -> bool {
        validate_profile_for_save(&self.to_candidate(), config).is_ok()
    }

    pub fn primary_photo(&self) -> Option<&str> {
        self.photo_urls.first().map(String::as_str)
    }
}

impl EntityMetadata for UserProfile {
    fn entity_name() -> &'static str {
        "UserProfile"
    }
}
