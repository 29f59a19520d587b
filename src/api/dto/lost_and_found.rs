//! DTOs for the lost-and-found endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{
    ApprovalStatus, Campus, Contact, InvalidDiscriminant, ItemKind, LostAndFoundFilter,
    LostAndFoundRecord,
};
use crate::error::AppError;
use crate::utils::string_list;

fn invalid_param(e: InvalidDiscriminant) -> AppError {
    AppError::param(
        "Validation failed",
        json!({ "fields": { e.field: [e.to_string()] } }),
    )
}

/// Request body for `POST /api/lost-and-found/list`.
///
/// Each field narrows the board only when set: an absent `type`, `campus: 0` and
/// `kind: 0` do not filter.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LostAndFoundListRequest {
    /// `true` for found-property notices, `false` for owners searching.
    #[serde(rename = "type", default)]
    pub is_found_notice: Option<bool>,

    /// 1 Zhaohui, 2 Pingfeng, 3 Moganshan.
    #[serde(default)]
    #[validate(range(max = 3, message = "campus must be between 0 and 3"))]
    pub campus: u8,

    /// 1 other, 2 meal card, 3 electronics, 4 sports & stationery,
    /// 5 clothing & bags, 6 certificates.
    #[serde(default)]
    #[validate(range(max = 6, message = "kind must be between 0 and 6"))]
    pub kind: u8,
}

impl LostAndFoundListRequest {
    /// Converts the request into a board filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Param`] for out-of-range enum values.
    pub fn to_filter(&self) -> Result<LostAndFoundFilter, AppError> {
        let campus = match self.campus {
            0 => None,
            v => Some(Campus::try_from(i16::from(v)).map_err(invalid_param)?),
        };
        let kind = match self.kind {
            0 => None,
            v => Some(ItemKind::try_from(i16::from(v)).map_err(invalid_param)?),
        };

        Ok(LostAndFoundFilter {
            is_found_notice: self.is_found_notice,
            campus,
            kind,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct LostAndFoundListResponse {
    pub list: Vec<LostAndFoundItem>,
}

/// Board entry.
#[derive(Debug, Serialize)]
pub struct LostAndFoundItem {
    pub id: i64,
    pub imgs: Vec<String>,
    pub name: String,
    pub place: String,
    pub time: String,
    pub introduction: String,
    pub kind: u8,
}

impl From<LostAndFoundRecord> for LostAndFoundItem {
    fn from(r: LostAndFoundRecord) -> Self {
        Self {
            id: r.id,
            imgs: string_list::decode(&r.imgs),
            name: r.name,
            place: r.place,
            time: r.time,
            introduction: r.introduction,
            kind: r.kind as u8,
        }
    }
}

/// Request body for `POST /api/lost-and-found/contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// 1 phone, 2 QQ, 3 WeChat.
    pub contact_way: u8,
    pub contact: String,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            contact_way: c.contact_way as u8,
            contact: c.contact,
        }
    }
}

/// Public summary of the newest record. `imgs` is the raw joined column.
#[derive(Debug, Serialize)]
pub struct LatestLostAndFoundResponse {
    #[serde(rename = "type")]
    pub is_found_notice: bool,
    pub imgs: String,
    pub name: String,
    pub place: String,
    pub introduction: String,
}

impl From<LostAndFoundRecord> for LatestLostAndFoundResponse {
    fn from(r: LostAndFoundRecord) -> Self {
        Self {
            is_found_notice: r.is_found_notice,
            imgs: r.imgs,
            name: r.name,
            place: r.place,
            introduction: r.introduction,
        }
    }
}

/// Request body for `POST /api/lost-and-found/user/status`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserStatusRequest {
    /// 0 withdrawn, 1 approved, 2 pending.
    #[serde(default)]
    #[validate(range(max = 2, message = "status must be between 0 and 2"))]
    pub status: u8,
}

impl UserStatusRequest {
    pub fn approval_status(&self) -> Result<ApprovalStatus, AppError> {
        ApprovalStatus::try_from(i16::from(self.status)).map_err(invalid_param)
    }
}

#[derive(Debug, Serialize)]
pub struct UserStatusResponse {
    pub list: Vec<UserStatusItem>,
}

/// One of the caller's own submissions, with its review state.
#[derive(Debug, Serialize)]
pub struct UserStatusItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub is_found_notice: bool,
    pub imgs: Vec<String>,
    pub name: String,
    pub kind: u8,
    pub place: String,
    pub time: String,
    pub introduction: String,
    pub is_approved: u8,
}

impl From<LostAndFoundRecord> for UserStatusItem {
    fn from(r: LostAndFoundRecord) -> Self {
        Self {
            id: r.id,
            is_found_notice: r.is_found_notice,
            imgs: string_list::decode(&r.imgs),
            name: r.name,
            kind: r.kind as u8,
            place: r.place,
            time: r.time,
            introduction: r.introduction,
            is_approved: r.approval as u8,
        }
    }
}
