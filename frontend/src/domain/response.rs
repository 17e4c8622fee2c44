//! Response envelopes exchanged with the TalentLink API.

use pagination::{Pagination, PaginationError, PaginationParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Envelope invariants violated by a payload or constructor call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseValidationError {
    /// A successful response carried an error message.
    #[error("successful responses must not carry an error")]
    SuccessWithError,
    /// A failed response carried no error message.
    #[error("failed responses must carry a non-empty error")]
    FailureWithoutError,
    /// A page holds more items than its limit allows.
    #[error("page holds {count} items but the limit is {limit}")]
    TooManyItems {
        /// Items on the page.
        count: usize,
        /// Page size from the pagination block.
        limit: u32,
    },
    /// The pagination block is inconsistent.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// Failure reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiFailure {
    /// Error reported by the server.
    pub error: String,
    /// Optional human-readable context.
    pub message: Option<String>,
}

/// Standard API envelope.
///
/// ## Invariants
/// - `success` responses carry no `error`.
/// - failed responses carry a non-blank `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ApiResponseDto<T>")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Failed response.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseValidationError::FailureWithoutError`] when `error`
    /// is blank.
    pub fn failure(error: impl Into<String>) -> Result<Self, ResponseValidationError> {
        let error = error.into();
        if error.trim().is_empty() {
            return Err(ResponseValidationError::FailureWithoutError);
        }
        Ok(Self {
            success: false,
            data: None,
            message: None,
            error: Some(error),
        })
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether the request succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Human-readable message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Error reported by the server, present only on failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Split into payload or failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] for failed responses.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::ApiResponse;
    ///
    /// let failed = ApiResponse::<u32>::failure("job closed").expect("valid failure");
    /// let err = failed.into_result().expect_err("failed response");
    /// assert_eq!(err.to_string(), "job closed");
    /// ```
    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        match (self.success, self.error) {
            (true, _) => Ok(self.data),
            (false, error) => Err(ApiFailure {
                error: error.unwrap_or_default(),
                message: self.message,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponseDto<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<String>,
}

impl<T> TryFrom<ApiResponseDto<T>> for ApiResponse<T> {
    type Error = ResponseValidationError;

    fn try_from(value: ApiResponseDto<T>) -> Result<Self, Self::Error> {
        let error = value.error.filter(|error| !error.trim().is_empty());
        match (value.success, error.is_some()) {
            (true, true) => Err(ResponseValidationError::SuccessWithError),
            (false, false) => Err(ResponseValidationError::FailureWithoutError),
            _ => Ok(Self {
                success: value.success,
                data: value.data,
                message: value.message,
                error,
            }),
        }
    }
}

/// [`ApiResponse`] over a page of items plus its pagination block.
///
/// ## Invariants
/// - The pagination block satisfies [`Pagination`]'s invariants.
/// - The page holds at most `limit` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginatedResponseDto<T>")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    #[serde(flatten)]
    response: ApiResponse<Vec<T>>,
    pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Successful page of `items` described by `pagination`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseValidationError::TooManyItems`] when `items` exceeds
    /// the page size.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Result<Self, ResponseValidationError> {
        check_page_size(items.len(), &pagination)?;
        Ok(Self {
            response: ApiResponse::success(items),
            pagination,
        })
    }

    /// Cut the page described by `params` out of a full in-memory collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseValidationError::Pagination`] when the requested page
    /// lies beyond the last page.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::PaginatedResponse;
    /// use pagination::PaginationParams;
    ///
    /// let params = PaginationParams::new(2, 2).expect("valid params");
    /// let page = PaginatedResponse::paginate(vec!["a", "b", "c"], &params).expect("in range");
    ///
    /// assert_eq!(page.items(), ["c"]);
    /// assert_eq!(page.pagination().total_pages(), 2);
    /// ```
    pub fn paginate(
        all_items: Vec<T>,
        params: &PaginationParams,
    ) -> Result<Self, ResponseValidationError> {
        let total = u64::try_from(all_items.len()).unwrap_or(u64::MAX);
        let pagination = Pagination::for_params(params, total)?;
        let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(params.limit()).unwrap_or(usize::MAX);
        let items = all_items.into_iter().skip(offset).take(limit).collect();
        Self::new(items, pagination)
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.response.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Pagination block.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Underlying envelope.
    #[must_use]
    pub const fn response(&self) -> &ApiResponse<Vec<T>> {
        &self.response
    }
}

fn check_page_size(count: usize, pagination: &Pagination) -> Result<(), ResponseValidationError> {
    let limit = pagination.limit();
    if u64::try_from(count).unwrap_or(u64::MAX) > u64::from(limit) {
        return Err(ResponseValidationError::TooManyItems { count, limit });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct PaginatedResponseDto<T> {
    #[serde(flatten)]
    response: ApiResponse<Vec<T>>,
    pagination: Pagination,
}

impl<T> TryFrom<PaginatedResponseDto<T>> for PaginatedResponse<T> {
    type Error = ResponseValidationError;

    fn try_from(value: PaginatedResponseDto<T>) -> Result<Self, Self::Error> {
        let count = value.response.data().map_or(0, Vec::len);
        check_page_size(count, &value.pagination)?;
        Ok(Self {
            response: value.response,
            pagination: value.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Covers envelope invariants and the paginated wire format.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn success_omits_absent_fields() {
        let value = serde_json::to_value(ApiResponse::success(3)).expect("serialise");
        assert_eq!(value, json!({ "success": true, "data": 3 }));
    }

    #[rstest]
    fn failure_requires_an_error() {
        assert_eq!(
            ApiResponse::<()>::failure("  "),
            Err(ResponseValidationError::FailureWithoutError)
        );
    }

    #[rstest]
    #[case(json!({ "success": true, "data": 1, "error": "boom" }))]
    #[case(json!({ "success": false }))]
    #[case(json!({ "success": false, "error": "" }))]
    fn inconsistent_envelopes_are_rejected(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<ApiResponse<u32>>(value).is_err());
    }

    #[rstest]
    fn failure_round_trips_with_message() {
        let value = json!({ "success": false, "message": "try later", "error": "unavailable" });
        let response: ApiResponse<u32> = serde_json::from_value(value).expect("valid failure");

        let failure = response.into_result().expect_err("failure");
        assert_eq!(failure.error, "unavailable");
        assert_eq!(failure.message.as_deref(), Some("try later"));
    }

    #[rstest]
    fn paginated_response_flattens_the_envelope() {
        let params = PaginationParams::new(1, 2).expect("valid params");
        let page = PaginatedResponse::paginate(vec![10_u32, 20, 30], &params).expect("in range");

        let value = serde_json::to_value(&page).expect("serialise");
        assert_eq!(
            value,
            json!({
                "success": true,
                "data": [10, 20],
                "pagination": { "page": 1, "limit": 2, "total": 3, "totalPages": 2 }
            })
        );
        let decoded: PaginatedResponse<u32> = serde_json::from_value(value).expect("deserialise");
        assert_eq!(decoded, page);
    }

    #[rstest]
    fn oversized_page_is_rejected() {
        let value = json!({
            "success": true,
            "data": [1, 2, 3],
            "pagination": { "page": 1, "limit": 2, "total": 3, "totalPages": 2 }
        });
        let err = serde_json::from_value::<PaginatedResponse<u32>>(value).expect_err("too many");
        assert!(err.to_string().contains("page holds 3 items"), "{err}");
    }

    #[rstest]
    fn page_past_the_end_is_rejected() {
        let params = PaginationParams::new(3, 10).expect("valid params");
        let result = PaginatedResponse::paginate(vec![1, 2, 3], &params);
        assert!(matches!(
            result,
            Err(ResponseValidationError::Pagination(
                PaginationError::PageOutOfRange { page: 3, last_page: 1 }
            ))
        ));
    }

    #[rstest]
    fn empty_collection_yields_empty_first_page() {
        let page = PaginatedResponse::<u8>::paginate(Vec::new(), &PaginationParams::default())
            .expect("first page of nothing");
        assert!(page.items().is_empty());
        assert_eq!(page.pagination().total_pages(), 0);
    }
}
