pub mod as_native {
    use crate::FlakeId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize an ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: FlakeId,
        ID::Ty: Serialize,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize an ID from its native integer representation.
    ///
    /// Every integer in range is a valid ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the number
    /// does not fit the ID's width.
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: FlakeId,
        ID::Ty: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        <ID::Ty>::deserialize(d).map(ID::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::as_native;
    use crate::{CompactId, StandardId};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_native")]
        standard: StandardId,
        #[serde(with = "as_native")]
        compact: CompactId,
    }

    #[test]
    fn native_round_trip() {
        let row = Row {
            standard: StandardId::from_raw(u64::MAX),
            compact: CompactId::from_raw(1280),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, json!({ "standard": u64::MAX, "compact": 1280 }));
        assert_eq!(serde_json::from_value::<Row>(value).unwrap(), row);
    }

    #[test]
    fn native_rejects_out_of_range() {
        let value = json!({ "standard": 1, "compact": u64::from(u32::MAX) + 1 });
        assert!(serde_json::from_value::<Row>(value).is_err());
    }
}
