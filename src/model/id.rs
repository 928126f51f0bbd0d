use mongodb::bson::oid::{self, ObjectId};
use serde::Deserialize as _;
use snafu::{ResultExt as _, Snafu};

/// A caller-supplied identifier string that does not decode to a 12-byte
/// object id. Raised before any storage call is made.
#[derive(Debug, Snafu)]
#[snafu(display("`{text}` is not a 24-character hex object id: {source}"))]
pub struct ParseIdError {
    pub text: String,
    pub source: oid::Error,
}

/// Defines a typed identifier backed by a 12-byte object id.
///
/// The wire form is the 24-character lowercase hex encoding; the storage form
/// is the raw [ObjectId]. Parsing a malformed string fails with
/// [ParseIdError] and never produces a partially decoded id.
macro_rules! object_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(ObjectId);

        impl $name {
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }

            pub(crate) fn from_object_id(id: ObjectId) -> Self {
                Self(id)
            }

            pub(crate) fn object_id(&self) -> ObjectId {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                ObjectId::parse_str(input)
                    .map($name)
                    .context(ParseIdSnafu { text: input })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.to_hex())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self, serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

object_id! {
    /// Identity of a vote record, assigned by the store at creation.
    VoteId
}

object_id! {
    /// Reference to the video a vote was cast on.
    VideoId
}

object_id! {
    /// Reference to the user who cast a vote.
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_re_encodes_as_lowercase_hex() {
        let id: VoteId = "61C4014DD6F4074658DB9772".parse().unwrap();
        assert_eq!(
            id.to_hex(),
            "61c4014dd6f4074658db9772",
            "hex encoding on the return path must be lowercase"
        );
        assert_eq!(id.to_string(), id.to_hex());
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!("not-a-valid-hex-id".parse::<VoteId>().is_err());
        assert!("61c4014d".parse::<VideoId>().is_err(), "too short");
        assert!(
            "61c4014dd6f4074658db97720".parse::<UserId>().is_err(),
            "25 characters is not a valid object id"
        );
        assert!("".parse::<VoteId>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let id: UserId = "61c4014dd6f4074658db9772".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("61c4014dd6f4074658db9772"));

        let back: UserId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialization_rejects_garbage() {
        let result: Result<VoteId, _> = serde_json::from_value(serde_json::json!("nope"));
        assert!(result.is_err());
    }
}
