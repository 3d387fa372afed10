pub mod as_string {
    use crate::FlakeId;
    use core::marker::PhantomData;
    use serde::{Deserializer, Serializer};

    /// Serialize an ID as its text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: FlakeId,
        S: Serializer,
    {
        s.collect_str(id)
    }

    /// Deserialize an ID from its text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the string
    /// is not a valid unsigned integer in the ID's base and width.
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: FlakeId,
        D: Deserializer<'de>,
    {
        struct TextVisitor<ID>(PhantomData<ID>);

        impl<ID> serde::de::Visitor<'_> for TextVisitor<ID>
        where
            ID: FlakeId,
        {
            type Value = ID;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "a {} id string", ID::KIND)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        d.deserialize_str(TextVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::as_string;
    use crate::{CompactId, StandardId};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_string")]
        standard: StandardId,
        #[serde(with = "as_string")]
        compact: CompactId,
    }

    #[test]
    fn string_round_trip() {
        let row = Row {
            standard: StandardId::from_raw(18_446_744_073_709_551_615),
            compact: CompactId::from_raw(0xdead_beef),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({ "standard": "18446744073709551615", "compact": "deadbeef" })
        );
        assert_eq!(serde_json::from_value::<Row>(value).unwrap(), row);
    }

    #[test]
    fn string_surfaces_parse_error() {
        let value = json!({ "standard": "12", "compact": "not-hex" });
        let err = serde_json::from_value::<Row>(value).unwrap_err();
        assert!(err.to_string().contains("invalid compact id"), "{err}");
    }

    #[test]
    fn string_rejects_numbers() {
        let value = json!({ "standard": 12, "compact": "1" });
        assert!(serde_json::from_value::<Row>(value).is_err());
    }
}
