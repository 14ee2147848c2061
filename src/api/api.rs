use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::models::todo::{ErrorDetail, TodoListResponse, TodoPayload, TodoResponse};
use crate::repository::database::Database;
use crate::Response;

fn todo_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDetail {
        detail: "Todo not found".to_string(),
    })
}

#[post("/todos")]
pub async fn create_todo(
    db: web::Data<Database>,
    payload: web::Json<TodoPayload>,
) -> HttpResponse {
    match db.create_todo(payload.into_inner()) {
        Ok(todo) => HttpResponse::Ok().json(TodoResponse {
            message: "Todo created!".to_string(),
            todo,
        }),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

#[get("/todos")]
pub async fn get_todos(db: web::Data<Database>) -> HttpResponse {
    match db.get_todos() {
        Ok(todos) => HttpResponse::Ok().json(TodoListResponse { todos }),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

#[get("/todos/{id}")]
pub async fn get_todo_by_id(db: web::Data<Database>, id: web::Path<i32>) -> HttpResponse {
    match db.get_todo_by_id(id.into_inner()) {
        Ok(Some(todo)) => HttpResponse::Ok().json(todo),
        Ok(None) => todo_not_found(),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<Database>,
    id: web::Path<i32>,
    payload: web::Json<TodoPayload>,
) -> HttpResponse {
    match db.update_todo_by_id(id.into_inner(), payload.into_inner()) {
        Ok(Some(todo)) => HttpResponse::Ok().json(TodoResponse {
            message: "Todo updated!".to_string(),
            todo,
        }),
        Ok(None) => todo_not_found(),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(db: web::Data<Database>, id: web::Path<i32>) -> HttpResponse {
    match db.delete_todo_by_id(id.into_inner()) {
        Ok(Some(())) => HttpResponse::Ok().json(Response {
            message: "Todo deleted!".to_string(),
        }),
        Ok(None) => todo_not_found(),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_todo)
        .service(get_todos)
        .service(get_todo_by_id)
        .service(update_todo_by_id)
        .service(delete_todo_by_id);
}
