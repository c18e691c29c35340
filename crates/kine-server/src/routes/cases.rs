use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct CaseSummary {
    id: String,
    title: String,
}

/// A case as shown to the student: the reference solution is withheld.
#[derive(Serialize)]
pub struct CaseDetail {
    id: String,
    title: String,
    description: String,
}

pub async fn list_cases() -> Json<Vec<CaseSummary>> {
    let cases = kine_cases::selectable_cases()
        .map(|c| CaseSummary {
            id: c.id.clone(),
            title: c.title.clone(),
        })
        .collect();
    Json(cases)
}

pub async fn get_case_detail(Path(id): Path<String>) -> Result<Json<CaseDetail>, ApiError> {
    let case = kine_cases::get_case(&id)
        .filter(|c| !kine_cases::is_placeholder(&c.id))
        .ok_or_else(|| ApiError::NotFound(format!("case not found: {id}")))?;

    Ok(Json(CaseDetail {
        id: case.id.clone(),
        title: case.title.clone(),
        description: case.description.clone(),
    }))
}
