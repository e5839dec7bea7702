use std::collections::HashMap;

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use super::{name, Headers};

impl Headers {
    /// Converts the list into a plain name to value map.
    ///
    /// The map has no order. Well-known names are lowercased, any other
    /// name keeps the spelling it was stored with. Repeated names,
    /// `Set-Cookie` included, are joined by `", "`.
    pub fn to_json(&self) -> HashMap<String, String> {
        let mut ret: HashMap<String, String> = HashMap::with_capacity(self.list.len());

        for (name, value) in self.list.iter() {
            let key = if name::is_well_known(name) {
                name.to_ascii_lowercase()
            }else{
                name.clone()
            };

            ret.entry(key)
                .and_modify(|combined| {
                    combined.push_str(", ");
                    combined.push_str(value);
                })
                .or_insert_with(|| value.clone());
        }

        ret
    }
}

/// Serializes as the `to_json` map.
impl Serialize for Headers {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        ser.collect_map(self.to_json())
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(des: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let record = HashMap::<String, String>::deserialize(des)?;

        Headers::with_init(record)
            .map_err(D::Error::custom)
    }
}
