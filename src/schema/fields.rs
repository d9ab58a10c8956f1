// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! JSON field encodings fixed by the cross-implementation schema.

/// Bytes as standard base64 strings.
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s.as_bytes()).map_err(D::Error::custom)
    }
}

/// Big integers as decimal strings.
pub mod decimal {
    use fvm_shared::bigint::BigInt;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<BigInt>().map_err(D::Error::custom)
    }
}

/// Content identifiers as DAG-JSON links, `{"/": "<cid>"}`, or `null`.
pub mod cid_link {
    use cid::Cid;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Link {
        #[serde(rename = "/")]
        target: String,
    }

    pub fn serialize<S: Serializer>(cid: &Option<Cid>, serializer: S) -> Result<S::Ok, S::Error> {
        cid.map(|c| Link { target: c.to_string() }).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Cid>, D::Error> {
        match Option::<Link>::deserialize(deserializer)? {
            Some(link) => Cid::try_from(link.target.as_str()).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
