/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use movie_catalog_lib::modules::identity::infrastructure::models::NewUserModel;
use movie_catalog_lib::modules::identity::{TokenClaims, User};
use movie_catalog_lib::modules::movie::MovieDraft;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct UserFactory {
    id: Uuid,
    username: String,
    is_staff: bool,
}

impl Default for UserFactory {
    fn default() -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            username: format!("user-{}", &id.simple().to_string()[..8]),
            is_staff: false,
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn admin(mut self) -> Self {
        self.is_staff = true;
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            email: format!("{}@example.com", self.username),
            username: self.username,
            is_staff: self.is_staff,
            created_at: Utc::now(),
        }
    }

    pub fn build_model(self) -> NewUserModel {
        NewUserModel {
            id: self.id,
            email: format!("{}@example.com", self.username),
            username: self.username,
            is_staff: self.is_staff,
        }
    }
}

pub struct MovieDraftFactory {
    title: String,
    duration: i32,
    genre: String,
}

impl Default for MovieDraftFactory {
    fn default() -> Self {
        Self {
            title: "Test Movie".to_string(),
            duration: 120,
            genre: "Drama".to_string(),
        }
    }
}

impl MovieDraftFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn build(self) -> MovieDraft {
        MovieDraft {
            title: self.title,
            description: "A test movie".to_string(),
            released_at: Utc.with_ymd_and_hms(2020, 5, 17, 0, 0, 0).unwrap(),
            duration: self.duration,
            genre: self.genre,
            language: "English".to_string(),
        }
    }
}


/// Sign a token the way the external issuer does
pub fn token_for(user_id: Uuid) -> String {
    token_with_exp(user_id, Utc::now().timestamp() as u64 + 3600)
}

pub fn expired_token_for(user_id: Uuid) -> String {
    token_with_exp(user_id, Utc::now().timestamp() as u64 - 3600)
}

fn token_with_exp(user_id: Uuid, exp: u64) -> String {
    let claims = TokenClaims {
        user_id,
        exp,
        iat: Utc::now().timestamp() as u64 - 7200,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}
