//! PostgreSQL Repository Implementations

use crate::domain::entity::user_record::UserRecord;
use crate::domain::repository::{TokenStore, UserLookup};
use crate::domain::value_object::{access_token::AccessToken, email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use crate::infra::database::Database;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    db: Database,
}

impl PgUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Register a user. `password_hash` must already be a PHC string.
    pub async fn create(&self, email: &Email, password_hash: &str) -> AuthResult<UserRecord> {
        let pool = self.db.pool().await?;
        let user_id = UserId::generate();

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id.as_str())
        .bind(email.as_str())
        .bind(password_hash)
        .execute(&pool)
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AuthError::EmailTaken);
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %user_id, "User created");

        Ok(UserRecord::new(user_id, email.as_str(), password_hash))
    }
}

// ============================================================================
// UserLookup Implementation
// ============================================================================

impl UserLookup for PgUserRepository {
    async fn load(&self, email: &str) -> AuthResult<Option<UserRecord>> {
        let pool = self.db.pool().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash
            FROM users
            WHERE email = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&pool)
        .await?;

        Ok(row.map(UserRow::into_record))
    }
}

// ============================================================================
// TokenStore Implementation
// ============================================================================

impl TokenStore for PgUserRepository {
    async fn update(&self, user_id: &UserId, token: &AccessToken) -> AuthResult<()> {
        let pool = self.db.pool().await?;

        let updated = sqlx::query(
            r#"
            UPDATE users SET
                access_token = $2,
                updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(token.as_str())
        .execute(&pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(AuthError::Internal(format!(
                "no user row for user_id {user_id}"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_record(self) -> UserRecord {
        UserRecord::new(UserId::new(self.user_id), self.email, self.password_hash)
    }
}
