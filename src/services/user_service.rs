use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::User;
use crate::repository::UserRepository;
use crate::services::ServiceError;

/// Account management and the credential check behind the login surface.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, name: String, email: String) -> Result<User, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("name is required".to_string()));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ServiceError::Validation(
                "a valid email is required".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            roles: vec!["user".to_string()],
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    /// Placeholder credential check: the account must exist and the
    /// secret-proof must be non-empty. Password hashing and storage are out
    /// of scope for this service; every failure collapses into the same
    /// [`ServiceError::InvalidCredentials`] so the response cannot reveal
    /// whether the identifier or the secret-proof was wrong.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        if email.is_empty() || password.is_empty() {
            return Err(ServiceError::InvalidCredentials);
        }
        match self.repo.get_by_email(email).await? {
            Some(user) => Ok(user),
            None => Err(ServiceError::InvalidCredentials),
        }
    }
}
