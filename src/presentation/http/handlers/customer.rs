//! Cliente Handlers
//!
//! HTTP entry points for the cliente CRUD API. Each handler is one linear
//! request/response cycle; response bodies and status codes follow the
//! contract consumed by the existing frontend, including its quirks:
//! `create` answers 201 even when the insert fails (the failure is carried
//! in the body), and a successful `update` answers 201 rather than 200.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::application::dto::CustomerPayload;
use crate::domain::Customer;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Page size fixed by the frontend's paginator.
const PAGE_SIZE: u32 = 4;

/// List every cliente.
///
/// `GET /api/clientes`
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let clientes = state.service.find_all().await?;
    Ok(Json(clientes))
}

/// List one page of clientes.
///
/// `GET /api/clientes/page/{page}`
///
/// Service-level pagination was never wired up; this endpoint currently
/// answers 200 with a `null` body.
pub async fn page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Response, AppError> {
    let result = state.service.find_page(page, PAGE_SIZE).await?;
    Ok(Json(result).into_response())
}

/// Fetch a single cliente.
///
/// `GET /api/clientes/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.service.find_by_id(id).await {
        Ok(Some(cliente)) => Ok((StatusCode::OK, Json(cliente)).into_response()),
        Ok(None) => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "mensaje": format!("El cliente ID:{} no existe en la base de datos", id),
            })),
        )
            .into_response()),
        Err(e) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "mensaje": "Error al realizar la consulta en la BD",
                "Error": e.detail(),
            })),
        )
            .into_response()),
    }
}

/// Create a cliente.
///
/// `POST /api/clientes`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Response, AppError> {
    payload.validate().map_err(|e| validation_error(&e))?;

    let cliente = Customer {
        id: None,
        nombre: payload.nombre,
        apellido: payload.apellido,
        email: payload.email,
        create_at: payload.create_at.unwrap_or_else(Utc::now),
        foto: None,
    };

    // The status code stays 201 even when the insert fails; the failure is
    // reported in the body only.
    let body = match state.service.save(cliente).await {
        Ok(created) => json!({
            "mensaje": "El cliente ha sido creado con exito",
            "cliente": created,
        }),
        Err(e) => json!({
            "mensaje": "Error al realizar el insert en la BD",
            "Error": e.detail(),
            "cliente": null,
        }),
    };

    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Update a cliente's nombre, apellido, email, and creation timestamp. The
/// photo is only ever touched through the upload endpoint.
///
/// `PUT /api/clientes/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Response, AppError> {
    payload.validate().map_err(|e| validation_error(&e))?;

    let Some(mut actual) = state.service.find_by_id(id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "mensaje": format!(
                    "Error: no se pudo editar, el cliente ID:{} no existe en la base de datos",
                    id
                ),
            })),
        )
            .into_response());
    };

    actual.nombre = payload.nombre;
    actual.apellido = payload.apellido;
    actual.email = payload.email;
    if let Some(create_at) = payload.create_at {
        actual.create_at = create_at;
    }

    match state.service.save(actual).await {
        Ok(updated) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "mensaje": "El cliente ha sido actualizado",
                "cliente": updated,
            })),
        )
            .into_response()),
        Err(e) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "mensaje": "Error al actualizar la base de datos",
                "error": e.detail(),
            })),
        )
            .into_response()),
    }
}

/// Delete a cliente, removing its photo file from disk first.
///
/// `DELETE /api/clientes/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let result: Result<(), AppError> = async {
        if let Some(cliente) = state.service.find_by_id(id).await? {
            if let Some(foto) = cliente.foto.as_deref().filter(|f| !f.is_empty()) {
                state.photos.remove(foto).await;
            }
        }
        state.service.delete(id).await
    }
    .await;

    match result {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({ "mensaje": "El cliente eliminado con éxito!" })),
        )
            .into_response()),
        Err(e) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "mensaje": "Error al eliminar el cliente de la base de datos",
                "error": e.detail(),
            })),
        )
            .into_response()),
    }
}

/// Attach a photo to a cliente.
///
/// `POST /api/clientes/upload` (multipart: `archivo` file part, `id` text part)
///
/// The file is stored under its original filename; a duplicate filename
/// overwrites the existing file. The previous photo of the cliente, when it
/// has a different name, is removed after the new one is stored. An empty
/// file part answers 201 with an empty body map.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (id, filename, data) = read_upload_parts(multipart).await?;

    let cliente = state.service.find_by_id(id).await?;

    if data.is_empty() || filename.is_empty() {
        return Ok((StatusCode::CREATED, Json(json!({}))).into_response());
    }

    let Some(mut cliente) = cliente else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "mensaje": format!("El cliente ID:{} no existe en la base de datos", id),
            })),
        )
            .into_response());
    };

    if let Err(e) = state.photos.save(&filename, data).await {
        return Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "mensaje": format!("Error al subir la imagen: {}", filename),
                "error": e.detail(),
            })),
        )
            .into_response());
    }

    // Drop the previous photo once the new one is on disk. When both carry
    // the same name the write above already replaced it.
    if let Some(anterior) = cliente.foto.take().filter(|f| !f.is_empty()) {
        if anterior != filename {
            state.photos.remove(&anterior).await;
        }
    }

    cliente.foto = Some(filename.clone());
    let cliente = state.service.save(cliente).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "cliente": cliente,
            "mensaje": format!("Has subido correctamente la imagen: {}", filename),
        })),
    )
        .into_response())
}

/// Pull the `archivo` and `id` parts out of the multipart request.
async fn read_upload_parts(mut multipart: Multipart) -> Result<(i64, String, Bytes), AppError> {
    let mut archivo: Option<(String, Bytes)> = None;
    let mut id: Option<i64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Petición multipart inválida: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "archivo" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("No se pudo leer el archivo: {}", e)))?;
                archivo = Some((filename, data));
            }
            "id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("No se pudo leer el id: {}", e)))?;
                id = Some(text.trim().parse().map_err(|_| {
                    AppError::BadRequest("El parámetro 'id' debe ser numérico".into())
                })?);
            }
            _ => {}
        }
    }

    let id = id.ok_or_else(|| AppError::BadRequest("Falta el parámetro 'id'".into()))?;
    let (filename, data) =
        archivo.ok_or_else(|| AppError::BadRequest("Falta el archivo 'archivo'".into()))?;

    Ok((id, filename, data))
}
