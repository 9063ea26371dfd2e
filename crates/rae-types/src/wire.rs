use serde::{Deserialize, Deserializer};

/// The service writes `null` for empty lists; treat it like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Missing, `null` and `""` all mean "not recorded". Any other value must be a
/// known member of `T`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    use serde::de::IntoDeserializer;
    use serde::de::value::StringDeserializer;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => {
            let value: StringDeserializer<D::Error> = s.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}
