use lambda_http::http::header::HeaderValue;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use pawtrack_atoms::{photos, tasks};
use pawtrack_shared::AppState;
use std::sync::Arc;

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,X-File-Name"),
    );
    resp
}

/// Service banner with the endpoint map
fn home() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({
                "message": "Task API is running!",
                "endpoints": {
                    "GET /tasks": "Get all tasks",
                    "POST /tasks": "Create a new task",
                    "GET /tasks/{id}": "Get a specific task",
                    "POST /tasks/{id}/complete": "Mark task complete and attach photo",
                    "DELETE /tasks/{id}": "Delete a task",
                    "POST /upload-photo": "Upload a photo",
                    "POST /seed-data": "Add sample tasks"
                }
            })
            .to_string()
            .into(),
        )
        .map_err(Box::new)?)
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({ "error": "Not found" })
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

/// Main Lambda handler - routes requests to the task and photo endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("🚀 API request - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == Method::OPTIONS {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    if path == "/" {
        return home().map(with_cors_headers);
    }

    let store = state.task_store.as_ref();
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let resp = match (method, parts.as_slice()) {
        // --- TASKS ---
        // GET /tasks - list all tasks
        (&Method::GET, ["tasks"]) => tasks::http::list_tasks(store).await,
        // POST /tasks - create task
        (&Method::POST, ["tasks"]) => tasks::http::create_task(store, body).await,
        // GET /tasks/{id} - get specific task
        (&Method::GET, ["tasks", task_id]) => tasks::http::get_task(store, task_id).await,
        // POST /tasks/{id}/complete - mark complete and attach photo
        (&Method::POST, ["tasks", task_id, "complete"]) => {
            tasks::http::complete_task(store, task_id, body).await
        }
        // DELETE /tasks/{id} - delete task
        (&Method::DELETE, ["tasks", task_id]) => tasks::http::delete_task(store, task_id).await,
        // POST /seed-data - insert sample tasks
        (&Method::POST, ["seed-data"]) => tasks::http::seed_tasks(store).await,

        // --- PHOTOS ---
        // POST /upload-photo - register a photo payload
        (&Method::POST, ["upload-photo"]) => {
            let content_type = event
                .headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok());
            let filename = event
                .headers()
                .get("X-File-Name")
                .and_then(|v| v.to_str().ok());
            photos::http::upload_photo(&state.photos, content_type, filename, body).await
        }
        // GET /photos/{id} - fetch a registered photo payload
        (&Method::GET, ["photos", photo_id]) => {
            photos::http::get_photo(&state.photos, photo_id).await
        }

        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    };

    resp.map(with_cors_headers)
}
