mod chip;
mod command;
mod input;

pub use chip::ChipType;
pub use command::{NodeJobCommand, encode_script};
pub use input::NodeJobInput;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}
