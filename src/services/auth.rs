use actix_web::{
    Error as ActixError, FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Data,
};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::config::Config;
use crate::database::models::{Admin, CreateEmployeeInput, Employee, EmployeeInfo};
use crate::database::repositories::{AdminRepository, EmployeeRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

/// The identity a token asserts. Internally tagged on `role` so the encoded
/// claims carry `{role, id, username}` for admins and `{role, id, email}`
/// for employees, and each role's display field exists by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
    Admin { id: i32, username: String },
    Employee { id: i32, email: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    pub exp: usize,
}

impl Claims {
    pub fn role(&self) -> Role {
        match self.identity {
            Identity::Admin { .. } => Role::Admin,
            Identity::Employee { .. } => Role::Employee,
        }
    }

    pub fn principal_id(&self) -> i32 {
        match self.identity {
            Identity::Admin { id, .. } => id,
            Identity::Employee { id, .. } => id,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn is_employee(&self) -> bool {
        self.role() == Role::Employee
    }

    /// The employee id behind this token, or Unauthorized for admin tokens.
    pub fn employee_id(&self) -> Result<i32, AppError> {
        match self.identity {
            Identity::Employee { id, .. } => Ok(id),
            Identity::Admin { .. } => Err(AppError::Unauthorized),
        }
    }
}

/// Sign a token for the given identity, expiring `jwt_expiration_days` from
/// now.
pub fn issue_token(config: &Config, identity: Identity) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::days(config.jwt_expiration_days))
        .ok_or_else(|| {
            log::error!("Token expiration overflowed");
            AppError::Internal(None)
        })?
        .timestamp() as usize;

    let claims = Claims {
        identity,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|err| {
        log::error!("Failed to sign token: {}", err);
        AppError::Internal(None)
    })
}

/// Decode and validate a token. Bad signature, bad structure, and expiry all
/// collapse into the same generic failure.
pub fn decode_token(config: &Config, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthenticated)
}

impl FromRequest for Claims {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // The access-control gate stores validated claims in the request
        // extensions; routes without the gate fall back to decoding the
        // header directly.
        if let Some(claims) = req.extensions().get::<Claims>() {
            return ready(Ok(claims.clone()));
        }

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));

        if let (Some(token), Some(config)) = (token, req.app_data::<Data<Config>>()) {
            return ready(decode_token(config, token).map_err(Into::into));
        }

        ready(Err(AppError::Unauthenticated.into()))
    }
}

#[derive(Clone)]
pub struct AuthService {
    admins: AdminRepository,
    employees: EmployeeRepository,
    config: Config,
}

impl AuthService {
    pub fn new(admins: AdminRepository, employees: EmployeeRepository, config: Config) -> Self {
        Self {
            admins,
            employees,
            config,
        }
    }

    /// Verify a submitted secret against a stored hash. A malformed hash is
    /// reported the same as a mismatch.
    fn credentials_match(password: &str, password_hash: &str) -> bool {
        verify(password, password_hash).unwrap_or(false)
    }

    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, Admin), AppError> {
        let admin = self
            .admins
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::credentials_match(password, &admin.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let token = issue_token(
            &self.config,
            Identity::Admin {
                id: admin.id,
                username: admin.username.clone(),
            },
        )?;

        Ok((token, admin))
    }

    pub async fn employee_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, Employee), AppError> {
        let employee = self
            .employees
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::credentials_match(password, &employee.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let token = issue_token(
            &self.config,
            Identity::Employee {
                id: employee.id,
                email: employee.email.clone(),
            },
        )?;

        Ok((token, employee))
    }

    /// Create an employee account (signup and admin-add share this path).
    /// The unique index on email is the enforcement point, so concurrent
    /// registrations for the same address cannot both win; the loser's
    /// violation surfaces as a Conflict.
    pub async fn register_employee(
        &self,
        input: CreateEmployeeInput,
    ) -> Result<EmployeeInfo, AppError> {
        let password_hash = hash(&input.password, DEFAULT_COST).map_err(|err| {
            log::error!("Failed to hash password: {}", err);
            AppError::Internal(None)
        })?;

        self.employees
            .create(&input.name, &input.email, &input.phone, &password_hash)
            .await
            .map_err(|err| match err.downcast::<sqlx::Error>() {
                Ok(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    AppError::Conflict("Email already registered".to_string())
                }
                Ok(other) => AppError::from(other),
                Err(other) => {
                    log::error!("Failed to create employee: {}", other);
                    AppError::Internal(None)
                }
            })
    }
}
