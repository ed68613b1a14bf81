//! Server listing domain models and listing-query parameter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server listing as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct ServerListing {
    pub id: String,
    pub name: String,
    pub link: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub current_member_count: Option<i32>,
    pub online_member_count: Option<i32>,
    pub is_partner: bool,
    pub created_at: DateTime<Utc>,
    pub last_synced: Option<DateTime<Utc>>,
}

impl ServerListing {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            link: entity.link,
            description: entity.description,
            icon_url: entity.icon_url,
            banner_url: entity.banner_url,
            current_member_count: entity.current_member_count,
            online_member_count: entity.online_member_count,
            is_partner: entity.is_partner,
            created_at: entity.created_at,
            last_synced: entity.last_synced,
        }
    }
}

/// Partner filter applied to listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartnerFilter {
    #[default]
    All,
    Partners,
    NonPartners,
}

impl PartnerFilter {
    /// Parses the query-string form (`all` / `partners` / `non-partners`).
    /// Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "partners" => Self::Partners,
            "non-partners" => Self::NonPartners,
            _ => Self::All,
        }
    }
}

/// Member-count bucket applied to listing queries.
///
/// `max` of `None` means the bucket is open-ended (`5000+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberCountRange {
    pub min: i32,
    pub max: Option<i32>,
}

impl MemberCountRange {
    /// Parses the query-string buckets; `all` or anything unknown means no
    /// filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0-100" => Some(Self {
                min: 0,
                max: Some(100),
            }),
            "100-500" => Some(Self {
                min: 100,
                max: Some(500),
            }),
            "500-1000" => Some(Self {
                min: 500,
                max: Some(1000),
            }),
            "1000-5000" => Some(Self {
                min: 1000,
                max: Some(5000),
            }),
            "5000+" => Some(Self { min: 5000, max: None }),
            _ => None,
        }
    }
}

/// Sort order for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerSort {
    #[default]
    Newest,
    Oldest,
    MembersDesc,
    MembersAsc,
    NameAsc,
    NameDesc,
}

impl ServerSort {
    /// Resolves the effective sort from the newer `sort_by`/`sort_order`
    /// parameter pair, falling back to the legacy single `sort` key.
    pub fn resolve(
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        legacy_sort: Option<&str>,
    ) -> Self {
        if let Some(sort_by) = sort_by {
            let asc = sort_order == Some("asc");
            return match sort_by {
                "member_count" => {
                    if asc {
                        Self::MembersAsc
                    } else {
                        Self::MembersDesc
                    }
                }
                "name" => {
                    if asc {
                        Self::NameAsc
                    } else {
                        Self::NameDesc
                    }
                }
                "created_at" => {
                    if asc {
                        Self::Oldest
                    } else {
                        Self::Newest
                    }
                }
                _ => Self::Newest,
            };
        }

        match legacy_sort {
            Some("members_desc") => Self::MembersDesc,
            Some("members_asc") => Self::MembersAsc,
            Some("name_asc") => Self::NameAsc,
            Some("name_desc") => Self::NameDesc,
            Some("oldest") => Self::Oldest,
            _ => Self::Newest,
        }
    }
}

/// Parameters for the paginated listing query.
#[derive(Debug, Clone, Default)]
pub struct ListServersParam {
    /// 1-indexed page number; 0 is treated as the first page.
    pub page: u64,
    pub per_page: u64,
    /// Name substring or exact id match.
    pub search: Option<String>,
    pub partner_filter: PartnerFilter,
    pub member_count_range: Option<MemberCountRange>,
    pub sort: ServerSort,
}

/// A page of server listings with pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginatedServers {
    pub servers: Vec<ServerListing>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body accepted by the PATCH endpoint. Only partner status is mutable here.
#[derive(Debug, Deserialize)]
pub struct UpdateServerDto {
    pub is_partner: Option<bool>,
}

/// A growth-history sample as exposed over the API.
#[derive(Debug, Serialize)]
pub struct GrowthSample {
    pub member_count: i32,
    pub recorded_at: DateTime<Utc>,
}

impl GrowthSample {
    pub fn from_entity(entity: entity::growth_history::Model) -> Self {
        Self {
            member_count: entity.member_count,
            recorded_at: entity.recorded_at,
        }
    }
}
