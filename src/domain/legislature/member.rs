//! Member records exchanged with the legislature API.

use serde::{Deserialize, Serialize};

use super::PartyRef;
use crate::domain::foundation::{MemberId, PartyId};

/// Member as listed by `GET /members/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub party_id: PartyId,
}

/// Member with biography and party, from `GET /members/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDetail {
    pub id: MemberId,
    pub name: String,
    pub party_id: PartyId,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub career: Option<String>,
    #[serde(default)]
    pub career2: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    pub party: PartyRef,
}
