use serde::Serializer;

pub mod order;
pub mod product;
pub mod user;

/// Serialize an amount kept in minor currency units as a decimal number.
pub(crate) fn serialize_cents<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(*cents as f64 / 100.0)
}
