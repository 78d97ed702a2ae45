use crate::params::Params;
use crate::route::Route;
use converters::Value;
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer, Unexpected, Visitor};
use std::marker::PhantomData;

pub use serde::de::value::Error as DeError;

impl<S> Route<S> {
    /// Match `path` and deserialize extracted params into `T`.
    ///
    /// Returns `Ok(None)` if the path doesn't match, and an error if params
    /// don't fit `T`. Optional parameters missing from the path leave
    /// [`Option`] fields as [`None`].
    ///
    /// ```
    /// use pathmold::{IntParam, Route, StrParam};
    ///
    /// #[derive(Debug, PartialEq, serde::Deserialize)]
    /// struct User {
    ///     id: u32,
    ///     tab: Option<String>,
    /// }
    ///
    /// let route = Route::new()
    ///     .extend(["users"]).unwrap()
    ///     .param("id", IntParam).unwrap()
    ///     .opt("tab", StrParam).unwrap();
    ///
    /// assert_eq!(
    ///     route.match_into::<User>("/users/7").unwrap(),
    ///     Some(User { id: 7, tab: None })
    /// );
    /// assert_eq!(route.match_into::<User>("/users/seven").unwrap(), None);
    /// ```
    pub fn match_into<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, DeError> {
        self.match_path(path).map(Params::deserialize_into).transpose()
    }
}

impl Params {
    /// Deserialize params into `T`, as if they were a map.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, DeError> {
        let deserializer: MapDeserializer<'_, _, DeError> = MapDeserializer::new(
            self.into_iter()
                .map(|(name, value)| (name, ValueDeserializer::new(value))),
        );

        T::deserialize(deserializer)
    }
}

/// Deserializer of a single parameter [`Value`].
pub struct ValueDeserializer<E> {
    value: Value,
    marker: PhantomData<E>,
}

impl<E> ValueDeserializer<E> {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }
}

impl<'de, E: de::Error> IntoDeserializer<'de, E> for ValueDeserializer<E> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

impl<'de, E: de::Error> Deserializer<'de> for ValueDeserializer<E> {
    type Error = E;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_string(s),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::DateTime(dt) => visitor.visit_string(dt.to_rfc3339()),
            Value::List(items) => {
                let mut seq = SeqDeserializer::new(items.into_iter().map(ValueDeserializer::new));
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
        }
    }

    // Bools are rendered as `true`/`false` strings.
    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        let flag = match self.value.as_str() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };

        match flag {
            Some(flag) => visitor.visit_bool(flag),
            None => self.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, E>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Str(variant) => visitor.visit_enum(variant.into_deserializer()),
            other => Err(de::Error::invalid_type(
                Unexpected::Other(other.kind()),
                &"unit variant",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use crate::{Route, RouteOpts};
    use converters::chrono::{DateTime, Utc};
    use converters::{ArrayParam, DateTimeParam, FloatParam, IntParam, StrParam};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Tab {
        Posts,
        Likes,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Profile {
        id: u64,
        tab: Option<Tab>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Listing {
        ids: Vec<i64>,
        ratio: f64,
        rest: Vec<String>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Flag {
        on: bool,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Event {
        at: DateTime<Utc>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum Sort {
        Newest,
        MostLiked,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Feed {
        sort: Sort,
    }

    fn profile_route() -> Route<crate::state::Optional> {
        Route::new()
            .extend(["u"])
            .unwrap()
            .param("id", IntParam)
            .unwrap()
            .opt("tab", StrParam)
            .unwrap()
    }

    #[test]
    fn optional_and_enum_fields() {
        let route = profile_route();

        assert_eq!(
            route.match_into::<Profile>("/u/3").unwrap(),
            Some(Profile { id: 3, tab: None })
        );
        assert_eq!(
            route.match_into::<Profile>("/u/3/likes").unwrap(),
            Some(Profile {
                id: 3,
                tab: Some(Tab::Likes)
            })
        );
        assert!(route.match_into::<Profile>("/u/3/reposts").is_err());
        assert_eq!(route.match_into::<Profile>("/x/3").unwrap(), None);
    }

    #[test]
    fn negative_into_unsigned_fails() {
        assert!(profile_route().match_into::<Profile>("/u/-3").is_err());
    }

    #[test]
    fn lists() {
        let route = Route::with_opts(RouteOpts::default())
            .param("ids", ArrayParam::new(IntParam))
            .unwrap()
            .param("ratio", FloatParam)
            .unwrap()
            .rest(StrParam)
            .unwrap();

        assert_eq!(
            route.match_into::<Listing>("/1,2/0.5/a/b").unwrap(),
            Some(Listing {
                ids: vec![1, 2],
                ratio: 0.5,
                rest: vec!["a".into(), "b".into()],
            })
        );
    }

    #[test]
    fn bools_from_strings() {
        let route = Route::new().param("on", StrParam).unwrap();

        assert_eq!(
            route.match_into::<Flag>("/true").unwrap(),
            Some(Flag { on: true })
        );
        assert!(route.match_into::<Flag>("/yes").is_err());
    }

    #[test]
    fn datetimes() {
        let route = Route::new().param("at", DateTimeParam).unwrap();
        let expected = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        assert_eq!(
            route.match_into::<Event>("/1700000000000").unwrap(),
            Some(Event { at: expected })
        );
    }

    #[test]
    fn enum_unused_variant_is_still_known() {
        assert_eq!(
            profile_route().match_into::<Profile>("/u/1/posts").unwrap(),
            Some(Profile {
                id: 1,
                tab: Some(Tab::Posts)
            })
        );
    }

    #[test]
    fn rendered_variants_read_back() {
        let route = Route::new().param("sort", StrParam).unwrap();
        let feed = Feed {
            sort: Sort::MostLiked,
        };

        let path = route.render_serialize(&feed).unwrap();

        assert_eq!(path, "/MostLiked");
        assert_eq!(route.match_into::<Feed>(&path).unwrap(), Some(feed));
        assert_eq!(
            route.match_into::<Feed>("/Newest").unwrap(),
            Some(Feed { sort: Sort::Newest })
        );
    }
}
