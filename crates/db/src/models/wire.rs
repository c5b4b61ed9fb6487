//! `serialize_with` adapters from stored date/time values to wire strings.

use boxlog_core::temporal::{encode_date, encode_time, StoredDate, StoredTime};
use serde::{Serialize, Serializer};

pub fn date<S: Serializer>(value: &StoredDate, serializer: S) -> Result<S::Ok, S::Error> {
    encode_date(Some(value)).serialize(serializer)
}

pub fn time<S: Serializer>(value: &Option<StoredTime>, serializer: S) -> Result<S::Ok, S::Error> {
    encode_time(value.as_ref()).serialize(serializer)
}
