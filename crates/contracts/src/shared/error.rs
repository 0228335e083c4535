use thiserror::Error;

/// Normalised failure of a REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server
    #[error("Không thể kết nối máy chủ: {0}")]
    Network(String),

    #[error("Không tìm thấy dữ liệu")]
    NotFound,

    /// Non-2xx transport status
    #[error("Lỗi máy chủ ({status}): {message}")]
    Http { status: u16, message: String },

    /// 2xx transport but the envelope reports a failure code
    #[error("{message}")]
    Api { code: i64, message: String },

    /// Body is not the expected envelope
    #[error("Dữ liệu trả về không hợp lệ: {0}")]
    Decode(String),

    /// Envelope parsed but carries no `data`
    #[error("Máy chủ không trả về dữ liệu")]
    MissingData,
}

impl ApiError {
    /// Map a non-2xx status and the (possibly empty) server message
    pub fn from_status(status: u16, message: Option<String>, status_text: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_text.to_string());
        ApiError::Http { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Client-side draft validation failure; blocks the submit before any call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Vui lòng nhập {0}")]
    Required(&'static str),

    #[error("Vui lòng chọn {0}")]
    NotSelected(&'static str),

    #[error("Giá thấp nhất phải lớn hơn 0")]
    NonPositiveMinPrice,

    #[error("Giá thấp nhất phải nhỏ hơn giá cao nhất")]
    PriceRange,

    #[error("Giá không được âm")]
    NegativePrice,

    #[error("Thời gian bắt đầu phải trước thời gian kết thúc")]
    TimeRange,

    #[error("Số ngày phải lớn hơn 0")]
    Duration,

    #[error("Hạng sao phải từ 1 đến 5")]
    StarRating,

    #[error("Tọa độ không hợp lệ")]
    Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_not_found() {
        assert_eq!(ApiError::from_status(404, Some("x".into()), "Not Found"), ApiError::NotFound);
    }

    #[test]
    fn test_from_status_prefers_server_message() {
        let err = ApiError::from_status(500, Some("Slug đã tồn tại".into()), "Internal Server Error");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Slug đã tồn tại".into()
            }
        );

        let err = ApiError::from_status(502, Some("   ".into()), "Bad Gateway");
        assert_eq!(err.to_string(), "Lỗi máy chủ (502): Bad Gateway");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Required("tên").to_string(), "Vui lòng nhập tên");
        assert_eq!(ValidationError::NotSelected("danh mục").to_string(), "Vui lòng chọn danh mục");
    }
}
