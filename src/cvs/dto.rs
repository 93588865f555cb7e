use serde::{Deserialize, Serialize};

use crate::cvs::repo::{Cv, CvPatch};
use crate::resume::ResumeData;

/// Request body for CV creation. Title is required by the caller-facing
/// contract; layout and data fall back to their defaults.
#[derive(Debug, Deserialize)]
pub struct CreateCvRequest {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub data: Option<ResumeData>,
    pub thumbnail: Option<String>,
}

/// Request body for CV update: omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCvRequest {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub data: Option<ResumeData>,
    pub thumbnail: Option<String>,
    pub is_paid: Option<bool>,
}

impl From<UpdateCvRequest> for CvPatch {
    fn from(body: UpdateCvRequest) -> Self {
        Self {
            title: body.title,
            layout: body.layout,
            data: body.data,
            thumbnail: body.thumbnail,
            is_paid: body.is_paid,
        }
    }
}

/// Offset pagination over the caller's CVs. Values below 1 clamp to 1.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}
fn default_limit() -> i64 {
    10
}

impl Pagination {
    pub fn clamped(&self) -> (i64, i64) {
        (self.page.max(1), self.limit.max(1))
    }

    pub fn offset(&self) -> i64 {
        let (page, limit) = self.clamped();
        (page - 1) * limit
    }
}

#[derive(Debug, Serialize)]
pub struct CvListResponse {
    pub data: Vec<Cv>,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Optional layout override for the server-side preview.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    pub layout: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.clamped(), (1, 10));
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn pagination_clamps_to_one() {
        let p = Pagination { page: 0, limit: 0 };
        assert_eq!(p.clamped(), (1, 1));
        assert_eq!(p.offset(), 0);

        let p = Pagination { page: -3, limit: -5 };
        assert_eq!(p.clamped(), (1, 1));
    }

    #[test]
    fn pagination_offset_skips_previous_pages() {
        let p = Pagination { page: 2, limit: 10 };
        assert_eq!(p.offset(), 10);

        let p = Pagination { page: 5, limit: 7 };
        assert_eq!(p.offset(), 28);
    }

    #[test]
    fn update_body_accepts_partial_fields() {
        let body: UpdateCvRequest = serde_json::from_value(serde_json::json!({
            "title": "New"
        }))
        .unwrap();
        assert_eq!(body.title.as_deref(), Some("New"));
        assert!(body.layout.is_none());
        assert!(body.data.is_none());
        assert!(body.is_paid.is_none());
    }

    #[test]
    fn update_body_is_paid_uses_camel_case() {
        let body: UpdateCvRequest =
            serde_json::from_value(serde_json::json!({ "isPaid": true })).unwrap();
        assert_eq!(body.is_paid, Some(true));
    }
}
