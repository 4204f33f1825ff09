use serde::Deserialize;

// JSON-LD listing block, only the path we read:
//
// {
//   "offers": {
//     "offeredBy": {
//       "name": "Jane Doe",
//       "worksFor": { "name": "Acme Brokers" }
//     }
//   }
// }

#[derive(Debug, Deserialize)]
pub struct ListingJsonLd {
    pub offers: Option<Offers>,
}

#[derive(Debug, Deserialize)]
pub struct Offers {
    #[serde(rename = "offeredBy")]
    pub offered_by: Option<OfferedBy>,
}

#[derive(Debug, Deserialize)]
pub struct OfferedBy {
    pub name: Option<String>,
    #[serde(rename = "worksFor")]
    pub works_for: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct Organization {
    pub name: Option<String>,
}

impl OfferedBy {
    /// `"name, company"`, skipping blank parts. `None` when neither is set.
    pub fn display_name(&self) -> Option<String> {
        let company = self.works_for.as_ref().and_then(|w| w.name.as_deref());
        let parts: Vec<&str> = [self.name.as_deref(), company]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}
