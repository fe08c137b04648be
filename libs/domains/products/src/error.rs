use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Why a product body was rejected.
///
/// The variants are checked in declaration order: a body that is both
/// missing a field and carrying a string-typed number reports `MissingFields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name, quantity and price are required")]
    MissingFields,

    #[error("quantity and price must be non-negative numbers")]
    InvalidNumbers,
}

#[derive(Debug, Error)]
pub enum ProductError {
    /// The raw id from the request path, kept for logging.
    #[error("product not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(ref id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::NotFound(err.to_string())
            }
            ProductError::Validation(e) => AppError::BadRequest(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
