// crates/profile/src/utils/identity_provider_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::ports::IdentityProvider;

// --- STUB IDENTITY PROVIDER ---
pub struct IdentityProviderStub {
    pub user_id_to_return: UserId,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// (email, password) reçus par sign_up / sign_in
    pub calls: Mutex<Vec<(String, String)>>,
    pub signed_out: Mutex<Vec<UserId>>,
}

impl IdentityProviderStub {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id_to_return: UserId::new_unchecked(user_id),
            error_to_return: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            signed_out: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        let stub = Self::new("unused");
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, email: &str, password: &str) -> Result<UserId> {
        self.calls.lock().unwrap().push((email.to_string(), password.to_string()));
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.user_id_to_return.clone())
    }
}

#[async_trait]
impl IdentityProvider for IdentityProviderStub {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserId> {
        self.answer(email, password)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId> {
        self.answer(email, password)
    }

    async fn sign_out(&self, user_id: &UserId) -> Result<()> {
        self.signed_out.lock().unwrap().push(user_id.clone());
        Ok(())
    }
}
