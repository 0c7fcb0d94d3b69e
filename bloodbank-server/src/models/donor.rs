//! Donor records, the create payload, and the list filter

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{RequiredFields, ValidationError};

/// Body of `POST /api/donors` before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonorPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub blood_type: Option<Value>,
    #[serde(default)]
    pub district: Option<Value>,
    #[serde(default)]
    pub contact: Option<Value>,
}

impl NewDonorPayload {
    /// Check that all four fields are present.
    pub fn validate(self) -> Result<NewDonor, ValidationError> {
        let mut required = RequiredFields::default();
        let donor = NewDonor {
            name: required.take("name", self.name),
            blood_type: required.take("bloodType", self.blood_type),
            district: required.take("district", self.district),
            contact: required.take("contact", self.contact),
        };
        required.finish()?;
        Ok(donor)
    }
}

/// A validated donor, ready to insert. Values are stored as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonor {
    pub name: Value,
    pub blood_type: Value,
    pub district: Value,
    pub contact: Value,
}

impl NewDonor {
    /// Attach the identity assigned by the store.
    pub fn with_id(self, id: String) -> Donor {
        Donor {
            id,
            name: self.name,
            blood_type: self.blood_type,
            district: self.district,
            contact: self.contact,
        }
    }
}

/// A stored donor as returned by `GET /api/donors`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Value,
    pub blood_type: Value,
    pub district: Value,
    pub contact: Value,
}

/// Exact-match donor filter. `None` matches any value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilter {
    pub blood_type: Option<String>,
    pub district: Option<String>,
}

impl DonorFilter {
    /// Build a filter from the query string pairs of `GET /api/donors`.
    ///
    /// Empty values (`?bloodType=`) do not constrain the result and unknown
    /// keys are ignored. Returns `None` when `bloodType` or `district` is
    /// given more than once: a list of values never equals a stored field,
    /// so no donor can match.
    pub fn from_query_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut blood_type = None;
        let mut district = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "bloodType" => &mut blood_type,
                "district" => &mut district,
                _ => continue,
            };
            if slot.replace(value).is_some() {
                return None;
            }
        }

        Some(Self {
            blood_type: blood_type.filter(|v: &String| !v.is_empty()),
            district: district.filter(|v: &String| !v.is_empty()),
        })
    }

    /// Exact match: only a stored string equal to the filter value passes.
    pub fn matches(&self, donor: &Donor) -> bool {
        fn field_matches(wanted: Option<&str>, stored: &Value) -> bool {
            wanted.map_or(true, |w| stored.as_str() == Some(w))
        }

        field_matches(self.blood_type.as_deref(), &donor.blood_type)
            && field_matches(self.district.as_deref(), &donor.district)
    }

    pub fn is_empty(&self) -> bool {
        self.blood_type.is_none() && self.district.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> NewDonorPayload {
        serde_json::from_str(json).unwrap()
    }

    fn donor(blood_type: &str, district: &str) -> Donor {
        Donor {
            id: "1".into(),
            name: "Asha".into(),
            blood_type: blood_type.into(),
            district: district.into(),
            contact: "0711111111".into(),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let donor = payload(
            r#"{"name":"Asha","bloodType":"O+","district":"Colombo","contact":"0711111111"}"#,
        )
        .validate()
        .unwrap();
        assert_eq!(donor.blood_type, "O+");
        assert_eq!(donor.contact, "0711111111");
    }

    #[test]
    fn each_missing_field_is_reported() {
        for field in ["name", "bloodType", "district", "contact"] {
            let mut body = serde_json::json!({
                "name": "Asha",
                "bloodType": "O+",
                "district": "Colombo",
                "contact": "0711111111",
            });
            body.as_object_mut().unwrap().remove(field);
            let p: NewDonorPayload = serde_json::from_value(body).unwrap();
            assert_eq!(p.validate().unwrap_err().fields(), [field]);
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let err = payload(r#"{"name":0,"bloodType":null,"district":"Kandy","contact":false}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err.fields(), ["name", "bloodType", "contact"]);
    }

    #[test]
    fn numeric_contact_is_kept_as_number() {
        let donor = payload(
            r#"{"name":"Asha","bloodType":"O+","district":"Colombo","contact":711111111}"#,
        )
        .validate()
        .unwrap();
        assert_eq!(donor.contact, serde_json::json!(711111111));
    }

    #[test]
    fn donor_serializes_with_wire_names() {
        let value = serde_json::to_value(donor("A-", "Galle")).unwrap();
        assert_eq!(value["_id"], "1");
        assert_eq!(value["bloodType"], "A-");
        assert!(value.get("blood_type").is_none());
    }

    fn pairs(query: &[(&str, &str)]) -> Vec<(String, String)> {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn filter_from_query_drops_empty_values() {
        let filter =
            DonorFilter::from_query_pairs(pairs(&[("bloodType", ""), ("district", "Colombo")]))
                .unwrap();
        assert_eq!(filter.blood_type, None);
        assert_eq!(filter.district.as_deref(), Some("Colombo"));
    }

    #[test]
    fn filter_from_query_ignores_unknown_keys() {
        let filter =
            DonorFilter::from_query_pairs(pairs(&[("page", "2"), ("page", "3"), ("bloodType", "O+")]))
                .unwrap();
        assert_eq!(filter.blood_type.as_deref(), Some("O+"));
        assert_eq!(filter.district, None);
    }

    #[test]
    fn repeated_filter_key_matches_nothing() {
        assert_eq!(
            DonorFilter::from_query_pairs(pairs(&[("bloodType", "A-"), ("bloodType", "B-")])),
            None
        );
        assert_eq!(
            DonorFilter::from_query_pairs(pairs(&[("district", "Kandy"), ("district", "")])),
            None
        );
    }

    #[test]
    fn filter_matching() {
        let d = donor("O+", "Colombo");
        assert!(DonorFilter::default().matches(&d));
        assert!(DonorFilter {
            blood_type: Some("O+".into()),
            district: None
        }
        .matches(&d));
        assert!(!DonorFilter {
            blood_type: Some("O+".into()),
            district: Some("Kandy".into())
        }
        .matches(&d));
        // exact match only
        assert!(!DonorFilter {
            blood_type: Some("o+".into()),
            district: None
        }
        .matches(&d));
    }

    #[test]
    fn filter_never_matches_non_string_fields() {
        let mut d = donor("O+", "Colombo");
        d.district = serde_json::json!(42);
        assert!(!DonorFilter {
            blood_type: None,
            district: Some("42".into())
        }
        .matches(&d));
    }
}
