//! Success bodies of the ads resource.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Created {
    pub status: &'static str,
    pub id: i32,
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    pub status: &'static str,
}

pub fn created(id: i32) -> (StatusCode, Json<Created>) {
    (StatusCode::OK, Json(Created { status: "OK", id }))
}

pub fn deleted() -> (StatusCode, Json<Deleted>) {
    (
        StatusCode::OK,
        Json(Deleted {
            status: "successfully deleted",
        }),
    )
}
