//! Text (de)serialization of labels and identifiers.
use crate::{Identifier, Label};
use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Label {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_text()
			.map_err(S::Error::custom)?
			.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Label {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Label::new(String::deserialize(deserializer)?).map_err(D::Error::custom)
	}
}

impl Serialize for Identifier {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_text()
			.map_err(S::Error::custom)?
			.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Identifier {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Identifier::try_from(String::deserialize(deserializer)?).map_err(D::Error::custom)
	}
}
