use {super::*, std::fmt::Write};

#[derive(Debug)]
pub(super) enum ServerError {
  BadRequest(String),
  Internal(Error),
  NotFound(String),
}

pub(super) type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
      Self::Internal(error) => {
        log::error!("error serving request: {error}");

        let mut message = String::from("error serving request");

        for cause in error.chain() {
          write!(message, ": {cause}").ok();
        }

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
      }
      Self::NotFound(message) => (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        message,
      )
        .into_response(),
    }
  }
}

impl From<Error> for ServerError {
  fn from(error: Error) -> Self {
    Self::Internal(error)
  }
}

impl From<pagination::Error> for ServerError {
  fn from(error: pagination::Error) -> Self {
    match error {
      pagination::Error::PageBelowOne | pagination::Error::EmptyPage => {
        Self::NotFound(error.to_string())
      }
      _ => Self::BadRequest(error.to_string()),
    }
  }
}
