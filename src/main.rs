use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use payroll_be::database::{
    init_database,
    repositories::{
        AdminRepository, AttendanceRepository, EmployeeRepository, LeaveRepository,
        PayrollRepository,
    },
};
use payroll_be::{AppState, AuthService, Config, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    // Load configuration
    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    // Initialize repositories and services
    let admin_repository = AdminRepository::new(pool.clone());
    let employee_repository = EmployeeRepository::new(pool.clone());
    let payroll_repository = PayrollRepository::new(pool.clone());
    let leave_repository = LeaveRepository::new(pool.clone());
    let attendance_repository = AttendanceRepository::new(pool.clone());
    let auth_service = AuthService::new(
        admin_repository,
        employee_repository.clone(),
        config.clone(),
    );

    let app_state = web::Data::new(AppState { auth_service });
    let employee_repo_data = web::Data::new(employee_repository);
    let payroll_repo_data = web::Data::new(payroll_repository);
    let leave_repo_data = web::Data::new(leave_repository);
    let attendance_repo_data = web::Data::new(attendance_repository);
    let pool_data = web::Data::new(pool.clone());
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    let client_base_url = config.client_base_url.clone();
    log::info!("Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(employee_repo_data.clone())
            .app_data(payroll_repo_data.clone())
            .app_data(leave_repo_data.clone())
            .app_data(attendance_repo_data.clone())
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&client_base_url)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await?;

    // Close the store handle once the server has drained
    pool.close().await;

    Ok(())
}
