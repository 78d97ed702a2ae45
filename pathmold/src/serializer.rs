use crate::error::RenderError;
use crate::params::Params;
use crate::route::Route;
use converters::Value;
use serde::ser::{
    Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple, SerializeTupleStruct,
    Serializer,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for [`ParamsSerializer`] functionality.
pub type Result<T> = std::result::Result<T, SerializeError>;

/// Serializer of route parameters.
///
/// # Accepted serialized values
///
/// * Flat structures and maps, assigning values by field/key name.
/// * Tuples, with member count equal to the number of parameters in
///   template, assigning values by position.
/// * Plain values (or plain sequences), if the template has exactly one
///   parameter.
/// * `()` and unit structs, if the template has no parameters.
///
/// Structure being flat means that it doesn't nest from the point of view of
/// [serde data model](https://serde.rs/data-model.html). Nested structs
/// should have their fields annotated with
/// [`#[serde(flatten)]`](https://serde.rs/attr-flatten.html).
///
/// Fields holding [`None`] are left out, which is how optional parameters
/// are skipped. Sequences become lists, for rest captures and array params.
pub struct ParamsSerializer<'r> {
    names: Vec<&'r str>,
    params: Params,
    next_position: usize,
    pending_key: Option<String>,
}

impl<'r> ParamsSerializer<'r> {
    /// Create new serializer for parameters of `route`.
    pub fn new<S>(route: &'r Route<S>) -> Self {
        Self {
            names: route.param_names().collect(),
            params: Params::new(),
            next_position: 0,
            pending_key: None,
        }
    }

    /// Take collected params after serialization and reset this instance,
    /// allowing for reuse with another serialized value.
    ///
    /// If you don't need to reuse serializer, use [`to_params`] short-hand
    /// function instead.
    pub fn finalize(&mut self) -> Params {
        self.next_position = 0;
        self.pending_key = None;
        std::mem::take(&mut self.params)
    }

    fn assign(&mut self, name: &str, value: Option<Value>) -> Result<()> {
        if !self.names.iter().any(|known| *known == name) {
            return Err(SerializeError::UnknownParam(name.to_owned()));
        }

        if let Some(value) = value {
            self.params.insert(name, value);
        }

        Ok(())
    }

    fn assign_single(&mut self, value: Option<Value>) -> Result<()> {
        match self.names.as_slice() {
            [name] => {
                let name = *name;
                self.assign(name, value)
            }
            _ => Err(SerializeError::InvalidLen),
        }
    }

    fn assign_next(&mut self, value: Option<Value>) -> Result<()> {
        let name = *self
            .names
            .get(self.next_position)
            .ok_or(SerializeError::InvalidLen)?;
        self.next_position += 1;

        self.assign(name, value)
    }

    fn assert_len(&self, len: usize) -> Result<()> {
        if self.names.len() == len {
            Ok(())
        } else {
            Err(SerializeError::InvalidLen)
        }
    }
}

/// Serialize value into [`Params`] of `route`.
pub fn to_params<S, T>(route: &Route<S>, value: &T) -> Result<Params>
where
    T: ?Sized + Serialize,
{
    let mut serializer = ParamsSerializer::new(route);
    value.serialize(&mut serializer)?;
    Ok(serializer.finalize())
}

impl<S> Route<S> {
    /// Serialize `value` into params and render them into a path.
    ///
    /// ```
    /// use pathmold::{IntParam, Route, StrParam};
    ///
    /// #[derive(serde::Serialize)]
    /// struct User<'a> {
    ///     id: i64,
    ///     tab: Option<&'a str>,
    /// }
    ///
    /// let route = Route::new()
    ///     .extend(["users"]).unwrap()
    ///     .param("id", IntParam).unwrap()
    ///     .opt("tab", StrParam).unwrap();
    ///
    /// let path = route.render_serialize(&User { id: 7, tab: None }).unwrap();
    /// assert_eq!(path, "/users/7");
    /// ```
    pub fn render_serialize<T>(&self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        let params = to_params(self, value)?;
        Ok(self.render(&params)?)
    }
}

macro_rules! forward_single {
    ($(($trait_fn:ident, $prim_ty:ty)),*) => {
        $(fn $trait_fn(self, v: $prim_ty) -> Result<()> {
            let value = ValueSerializer.$trait_fn(v)?;
            self.assign_single(value)
        })*
    };
}

impl<'m, 'r> Serializer for &'m mut ParamsSerializer<'r> {
    type Ok = ();
    type Error = SerializeError;

    type SerializeMap = Self;
    type SerializeSeq = SingleList<'m, 'r>;
    type SerializeStruct = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeStructVariant = Impossible<Self::Ok, Self::Error>;
    type SerializeTupleVariant = Impossible<Self::Ok, Self::Error>;

    forward_single!(
        (serialize_bool, bool),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_u128, u128),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_i128, i128),
        (serialize_f32, f32),
        (serialize_f64, f64),
        (serialize_char, char),
        (serialize_str, &str)
    );

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(SerializeError::TypeNotSupported("&[u8]"))
    }

    fn serialize_none(self) -> Result<()> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.assert_len(0)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.assert_len(0)
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        let value = ValueSerializer.serialize_unit_variant(name, variant_index, variant)?;
        self.assign_single(value)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(SerializeError::TypeNotSupported("newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SingleList {
            parent: self,
            items: ListSerializer::with_capacity(len),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.assert_len(len)?;
        self.next_position = 0;
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(SerializeError::TypeNotSupported("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(SerializeError::TypeNotSupported("struct variant"))
    }
}

impl SerializeStruct for &mut ParamsSerializer<'_> {
    type Ok = ();
    type Error = SerializeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value.serialize(ValueSerializer)?;
        self.assign(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeMap for &mut ParamsSerializer<'_> {
    type Ok = ();
    type Error = SerializeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Some(Value::Str(key)) => {
                self.pending_key = Some(key);
                Ok(())
            }
            _ => Err(SerializeError::KeyMustBeString),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or(SerializeError::KeyMustBeString)?;
        let value = value.serialize(ValueSerializer)?;
        self.assign(&key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeTuple for &mut ParamsSerializer<'_> {
    type Ok = ();
    type Error = SerializeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value.serialize(ValueSerializer)?;
        self.assign_next(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl SerializeTupleStruct for &mut ParamsSerializer<'_> {
    type Ok = <Self as SerializeTuple>::Ok;
    type Error = <Self as SerializeTuple>::Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeTuple::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        SerializeTuple::end(self)
    }
}

/// Plain sequence, serialized into the only parameter of a template.
pub struct SingleList<'m, 'r> {
    parent: &'m mut ParamsSerializer<'r>,
    items: ListSerializer,
}

impl SerializeSeq for SingleList<'_, '_> {
    type Ok = ();
    type Error = SerializeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(&mut self.items, value)
    }

    fn end(self) -> Result<()> {
        let value = SerializeSeq::end(self.items)?;
        self.parent.assign_single(value)
    }
}

/// Serializer of a single parameter value.
///
/// Produces [`None`] for absent options.
struct ValueSerializer;

macro_rules! impl_with_int {
    ($(($trait_fn:ident, $prim_ty:ty)),*) => {
        $(fn $trait_fn(self, v: $prim_ty) -> Result<Option<Value>> {
            i64::try_from(v)
                .map(|v| Some(Value::Int(v)))
                .map_err(|_| SerializeError::IntegerOverflow(v.to_string()))
        })*
    };
}

impl Serializer for ValueSerializer {
    type Ok = Option<Value>;
    type Error = SerializeError;

    type SerializeMap = Impossible<Self::Ok, Self::Error>;
    type SerializeSeq = ListSerializer;
    type SerializeStruct = Impossible<Self::Ok, Self::Error>;
    type SerializeTuple = ListSerializer;
    type SerializeTupleStruct = ListSerializer;
    type SerializeStructVariant = Impossible<Self::Ok, Self::Error>;
    type SerializeTupleVariant = Impossible<Self::Ok, Self::Error>;

    impl_with_int!(
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_u128, u128),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_i128, i128)
    );

    fn is_human_readable(&self) -> bool {
        true
    }

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(Value::Str(if v { "true" } else { "false" }.to_owned())))
    }

    // Widened through the shortest text form, so `0.1f32` stays `0.1`.
    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        let widened = v.to_string().parse().unwrap_or_else(|_| f64::from(v));
        Ok(Some(Value::Float(widened)))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(Value::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(Value::Str(v.to_string())))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(Value::Str(v.to_owned())))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(SerializeError::TypeNotSupported("&[u8]"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(SerializeError::TypeNotSupported("()"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Err(SerializeError::TypeNotSupported("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(Value::Str(variant.to_owned())))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(SerializeError::TypeNotSupported("newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ListSerializer::with_capacity(len))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(ListSerializer::with_capacity(Some(len)))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(ListSerializer::with_capacity(Some(len)))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(SerializeError::TypeNotSupported("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(SerializeError::DeepNesting)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(SerializeError::DeepNesting)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(SerializeError::TypeNotSupported("struct variant"))
    }
}

/// Collector of sequence elements into [`Value::List`].
struct ListSerializer {
    items: Vec<Value>,
}

impl ListSerializer {
    fn with_capacity(len: Option<usize>) -> Self {
        Self {
            items: Vec::with_capacity(len.unwrap_or_default()),
        }
    }
}

impl SerializeSeq for ListSerializer {
    type Ok = Option<Value>;
    type Error = SerializeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value
            .serialize(ValueSerializer)?
            .ok_or(SerializeError::TypeNotSupported("option inside sequence"))?;
        self.items.push(value);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(Value::List(self.items)))
    }
}

impl SerializeTuple for ListSerializer {
    type Ok = Option<Value>;
    type Error = SerializeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for ListSerializer {
    type Ok = Option<Value>;
    type Error = SerializeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        SerializeSeq::end(self)
    }
}

/// Type of errors, returned by [`ParamsSerializer`] and
/// [`Route::render_serialize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializeError {
    /// Byte slices and any enum variants, other than unit variants, are not
    /// supported.
    #[error("type `{0}` is not supported")]
    TypeNotSupported(&'static str),
    /// Custom error variant in accordance with serde guidelines.
    #[error("{0}")]
    Custom(String),
    /// Serialized tuple or plain value didn't fit the number of parameters
    /// in template.
    #[error("number of serialized elements doesn't match route params")]
    InvalidLen,
    /// Serialized value was a nested struct or map.
    #[error("only plain values or serde flattened structs can be rendered into a path")]
    DeepNesting,
    /// Serialized value contained a name unknown to the template.
    #[error("unknown param: {0}")]
    UnknownParam(String),
    /// Map keys have to serialize as strings.
    #[error("map keys must be strings")]
    KeyMustBeString,
    /// Integer didn't fit into [`i64`].
    #[error("integer {0} is out of range")]
    IntegerOverflow(String),
    /// Serialized params couldn't be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl serde::ser::Error for SerializeError {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::Custom(msg.to_string())
    }
}
