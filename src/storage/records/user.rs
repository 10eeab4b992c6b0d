use crate::domain::user::User;
use time::OffsetDateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            created_at: record.created_at,
        }
    }
}
