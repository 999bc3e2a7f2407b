//! Party records exchanged with the legislature API.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, PartyId};

/// Party as listed by `GET /parties/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub ideology: Option<String>,
}

/// Party with its member roster, from `GET /parties/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyDetail {
    pub id: PartyId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub ideology: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberBasic>,
}

/// Roster entry embedded in a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBasic {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}
