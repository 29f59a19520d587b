//! Lost-and-found bulletin board records and their enumerations.

use chrono::{DateTime, Utc};

use super::InvalidDiscriminant;

/// Campus where an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campus {
    Other = 0,
    Zhaohui = 1,
    Pingfeng = 2,
    Moganshan = 3,
}

impl TryFrom<i16> for Campus {
    type Error = InvalidDiscriminant;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Campus::Other),
            1 => Ok(Campus::Zhaohui),
            2 => Ok(Campus::Pingfeng),
            3 => Ok(Campus::Moganshan),
            _ => Err(InvalidDiscriminant::new("campus", value)),
        }
    }
}

/// Category of a lost-and-found item.
///
/// `0` is not a kind: list filters use it to mean "all kinds".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Other = 1,
    MealCard = 2,
    Electronics = 3,
    SportsAndStationery = 4,
    ClothingAndBags = 5,
    Certificates = 6,
}

impl TryFrom<i16> for ItemKind {
    type Error = InvalidDiscriminant;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ItemKind::Other),
            2 => Ok(ItemKind::MealCard),
            3 => Ok(ItemKind::Electronics),
            4 => Ok(ItemKind::SportsAndStationery),
            5 => Ok(ItemKind::ClothingAndBags),
            6 => Ok(ItemKind::Certificates),
            _ => Err(InvalidDiscriminant::new("kind", value)),
        }
    }
}

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Withdrawn = 0,
    Approved = 1,
    Pending = 2,
}

impl TryFrom<i16> for ApprovalStatus {
    type Error = InvalidDiscriminant;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ApprovalStatus::Withdrawn),
            1 => Ok(ApprovalStatus::Approved),
            2 => Ok(ApprovalStatus::Pending),
            _ => Err(InvalidDiscriminant::new("is_approved", value)),
        }
    }
}

/// Channel through which a publisher can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactWay {
    Phone = 1,
    Qq = 2,
    Wechat = 3,
}

impl TryFrom<i16> for ContactWay {
    type Error = InvalidDiscriminant;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ContactWay::Phone),
            2 => Ok(ContactWay::Qq),
            3 => Ok(ContactWay::Wechat),
            _ => Err(InvalidDiscriminant::new("contact_way", value)),
        }
    }
}

/// A lost-and-found submission as persisted.
///
/// `imgs` keeps the raw joined column; decode it with
/// [`crate::utils::string_list::decode`] when a list is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct LostAndFoundRecord {
    pub id: i64,
    /// Wire `type`. `true` marks a found-property notice (someone picked the
    /// item up), `false` an owner searching for something they lost.
    pub is_found_notice: bool,
    pub campus: Campus,
    pub kind: ItemKind,
    pub name: String,
    pub place: String,
    pub time: String,
    pub introduction: String,
    pub imgs: String,
    /// Student id of the submitter.
    pub publisher: String,
    pub contact_way: ContactWay,
    pub contact: String,
    pub approval: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

impl LostAndFoundRecord {
    pub fn is_owned_by(&self, student_id: &str) -> bool {
        self.publisher == student_id
    }

    pub fn is_public(&self) -> bool {
        self.approval == ApprovalStatus::Approved
    }
}

/// Contact details of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub contact_way: ContactWay,
    pub contact: String,
}

/// Board filter. `None` fields do not constrain the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LostAndFoundFilter {
    pub is_found_notice: Option<bool>,
    pub campus: Option<Campus>,
    pub kind: Option<ItemKind>,
}

impl LostAndFoundFilter {
    /// Returns true if `record` satisfies every present constraint.
    ///
    /// Visibility (approval) is not part of the filter.
    pub fn matches(&self, record: &LostAndFoundRecord) -> bool {
        self.is_found_notice.is_none_or(|v| record.is_found_notice == v)
            && self.campus.is_none_or(|c| record.campus == c)
            && self.kind.is_none_or(|k| record.kind == k)
    }
}
