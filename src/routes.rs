use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use sqlx::PgPool;

use crate::database;
use crate::error::AppError;
use crate::handlers::{attendance, auth, employees, leaves, payroll};
use crate::middleware::RequireAuth;

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Payroll Management System API is running")
}

async fn test_db(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let db_time = database::database_time(&pool).await?;
    Ok(HttpResponse::Ok().json(json!({ "dbTime": db_time })))
}

/// The full route table, shared between the server and the integration
/// tests. Every mutating admin route sits behind the admin gate, including
/// the delete endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/test-db", web::get().to(test_db))
        .route("/admin/login", web::post().to(auth::admin_login))
        .route("/employee/login", web::post().to(auth::employee_login))
        .route("/employee/signup", web::post().to(auth::signup))
        .service(
            web::scope("/employees")
                .route("", web::get().to(employees::list_employees))
                .route("", web::post().to(employees::create_employee))
                .route("/{id}", web::put().to(employees::update_employee))
                .wrap(RequireAuth::admin()),
        )
        .service(
            web::scope("/api/employees")
                // /count before /{id} so the literal segment wins
                .route("/count", web::get().to(employees::count_employees))
                .route("/{id}", web::delete().to(employees::delete_employee))
                .wrap(RequireAuth::admin()),
        )
        .service(
            web::resource("/payroll")
                .route(web::post().to(payroll::create_payroll))
                .wrap(RequireAuth::admin()),
        )
        .service(
            web::resource("/payroll/{employee_id}")
                .route(web::get().to(payroll::get_employee_payroll))
                .wrap(RequireAuth::authenticated()),
        )
        .service(
            web::resource("/leaves")
                .route(web::post().to(leaves::create_leave))
                .wrap(RequireAuth::employee()),
        )
        .service(
            web::resource("/leaves/{id}/status")
                .route(web::put().to(leaves::update_leave_status))
                .wrap(RequireAuth::admin()),
        )
        .service(
            web::scope("/leave-requests")
                .route("", web::post().to(leaves::create_leave))
                .route("/employee", web::get().to(leaves::my_leaves))
                .wrap(RequireAuth::employee()),
        )
        .service(
            web::scope("/api/leave-requests")
                .route("/pending", web::get().to(leaves::pending_leaves))
                .route(
                    "/pending/count",
                    web::get().to(leaves::pending_leaves_count),
                )
                .wrap(RequireAuth::admin()),
        )
        .service(
            web::resource("/employee/attendance")
                .route(web::post().to(attendance::submit_attendance))
                .wrap(RequireAuth::employee()),
        )
        .service(
            web::resource("/admin/attendance")
                .route(web::get().to(attendance::list_attendance))
                .wrap(RequireAuth::admin()),
        );
}
