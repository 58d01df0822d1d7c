use crate::RepositoryError;

pub type Response<T> = Result<T, RepositoryError>;

pub(crate) trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, mongodb::error::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InMongoDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}
