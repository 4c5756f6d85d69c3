//! REST handlers for the education view's training catalog.

use axum::Json;
use phishsim_education::catalog::{self, Course, Quiz, ResourceGuide};

/// GET /api/v1/education/courses
pub async fn courses() -> Json<Vec<Course>> {
    Json(catalog::courses())
}

/// GET /api/v1/education/resources
pub async fn resources() -> Json<Vec<ResourceGuide>> {
    Json(catalog::resources())
}

/// GET /api/v1/education/quizzes
pub async fn quizzes() -> Json<Vec<Quiz>> {
    Json(catalog::quizzes())
}
