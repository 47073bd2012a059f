use actix_web::{App, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::postgres::{PgPool, PgPoolOptions};

use payroll_be::database::repositories::{
    AdminRepository, AttendanceRepository, EmployeeRepository, LeaveRepository, PayrollRepository,
};
use payroll_be::services::auth::{Claims, Identity, issue_token};
use payroll_be::{AppState, AuthService, Config, routes};

/// Test application factory. The pool is created lazily and never connects;
/// the tests built on this exercise the gate and input validation, both of
/// which reject requests before any query runs.
pub struct TestApp {
    pub config: Config,
    pub pool: PgPool,
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost:5432/payroll_test".to_string(),
        jwt_secret: "test-jwt-secret-key-that-is-long-enough".to_string(),
        jwt_expiration_days: 7,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        client_base_url: "http://localhost:3000".to_string(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        let config = test_config();

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.database_url)
            .expect("lazy pool");

        TestApp { config, pool }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let admin_repository = AdminRepository::new(self.pool.clone());
        let employee_repository = EmployeeRepository::new(self.pool.clone());
        let auth_service = AuthService::new(
            admin_repository,
            employee_repository.clone(),
            self.config.clone(),
        );

        App::new()
            .app_data(web::Data::new(AppState { auth_service }))
            .app_data(web::Data::new(employee_repository))
            .app_data(web::Data::new(PayrollRepository::new(self.pool.clone())))
            .app_data(web::Data::new(LeaveRepository::new(self.pool.clone())))
            .app_data(web::Data::new(AttendanceRepository::new(self.pool.clone())))
            .app_data(web::Data::new(self.pool.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .configure(routes::configure)
    }

    pub fn admin_token(&self) -> String {
        issue_token(
            &self.config,
            Identity::Admin {
                id: 1,
                username: "boss".to_string(),
            },
        )
        .expect("admin token")
    }

    pub fn employee_token(&self) -> String {
        issue_token(
            &self.config,
            Identity::Employee {
                id: 1,
                email: "a@x.com".to_string(),
            },
        )
        .expect("employee token")
    }

    /// A structurally valid token whose expiry is in the past.
    pub fn expired_token(&self) -> String {
        let claims = Claims {
            identity: Identity::Employee {
                id: 1,
                email: "late@x.com".to_string(),
            },
            exp: (Utc::now() - Duration::days(1)).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
        .expect("expired token")
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Postgres-backed context for repository tests. Connects to `DATABASE_URL`
/// and runs the migrations; callers skip their test when no database is
/// configured.
pub struct TestDb {
    pub pool: PgPool,
}

impl TestDb {
    pub async fn connect() -> Option<Self> {
        let url = std::env::var("DATABASE_URL").ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");

        Some(Self { pool })
    }
}

/// Unique per-call email so tests can share one database without clashing
/// on the unique index.
pub fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock")
        .as_nanos();
    format!("{}-{}-{}@example.com", prefix, std::process::id(), nanos)
}
