use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::storage::user_repo::UserRepository;

#[derive(Clone, Debug)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    #[tracing::instrument(
        skip(self, username, email),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn create_user(&self, username: &str, email: &str) -> Result<User> {
        if username.trim().is_empty() || email.trim().is_empty() {
            return Err(AppError::InvalidPayload);
        }

        let user = self.user_repo.create(username, email).await?;

        tracing::Span::current().record("user_id", user.id);
        tracing::info!("User created");

        Ok(user)
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.user_repo.find_by_id(id).await?.ok_or(AppError::UserNotFound)
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo.list_all().await
    }
}
