use serde::{Serialize, Serializer};
use std::fmt;

/// A currency or number read from a labeled field.
///
/// Most pages format these as `$1,250,000`, which parse to `Numeric`. When the
/// site's formatting is unexpected the cleaned-up page text is kept as `Raw`
/// instead of failing the whole listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Financial {
    Numeric(i64),
    Raw(String),
}

impl Financial {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Financial::Numeric(n) => Some(*n),
            Financial::Raw(_) => None,
        }
    }
}

/// One column value of a listing, as handed to the CSV/XLSX writers and the
/// listings table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Integer(n) => write!(f, "{n}"),
            // Keep a trailing ".0" on whole ratios so 2.0 doesn't read as a count.
            Cell::Decimal(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Cell::Decimal(v) => write!(f, "{v}"),
        }
    }
}

impl From<Option<&String>> for Cell {
    fn from(value: Option<&String>) -> Self {
        value.map_or(Cell::Empty, |s| Cell::Text(s.clone()))
    }
}

impl From<Option<&Financial>> for Cell {
    fn from(value: Option<&Financial>) -> Self {
        match value {
            Some(Financial::Numeric(n)) => Cell::Integer(*n),
            Some(Financial::Raw(s)) => Cell::Text(s.clone()),
            None => Cell::Empty,
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Decimal)
    }
}

/// A single scraped business-for-sale listing.
///
/// The column set and its order never vary between records, so exporters can
/// always take their header from [`ListingRecord::FIELD_NAMES`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListingRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,

    #[serde(rename = "AskingPrice")]
    pub asking_price: Option<Financial>,
    #[serde(rename = "GrossRevenue")]
    pub gross_revenue: Option<Financial>,
    #[serde(rename = "CashFlow")]
    pub cash_flow: Option<Financial>,
    #[serde(rename = "EBITDA")]
    pub ebitda: Option<Financial>,
    #[serde(rename = "Established")]
    pub established: Option<Financial>,

    #[serde(rename = "SellerFinancing", serialize_with = "yes_no")]
    pub seller_financing: bool,

    // Detail list
    #[serde(rename = "Inventory")]
    pub inventory: Option<String>,
    #[serde(rename = "FF&E")]
    pub ffe: Option<String>,
    #[serde(rename = "Employees")]
    pub employees: Option<String>,
    #[serde(rename = "RealEstate")]
    pub real_estate: Option<String>,
    #[serde(rename = "Facilities")]
    pub facilities: Option<String>,
    #[serde(rename = "Competition")]
    pub competition: Option<String>,
    #[serde(rename = "GrowthExpansion")]
    pub growth_expansion: Option<String>,
    #[serde(rename = "Financing")]
    pub financing: Option<String>,
    #[serde(rename = "SupportTraining")]
    pub support_training: Option<String>,
    #[serde(rename = "ReasonForSelling")]
    pub reason_for_selling: Option<String>,

    #[serde(rename = "Broker")]
    pub broker: Option<String>,

    // Derived
    #[serde(rename = "Price/Revenue Multiple")]
    pub price_revenue_multiple: Option<f64>,
    #[serde(rename = "Price/CashFlow Multiple")]
    pub price_cash_flow_multiple: Option<f64>,
    #[serde(rename = "Price/EBITDA Multiple")]
    pub price_ebitda_multiple: Option<f64>,
    #[serde(rename = "Profit Margin %")]
    pub profit_margin: Option<f64>,

    #[serde(rename = "BusinessDescription")]
    pub business_description: Option<String>,
}

pub const FIELD_COUNT: usize = 24;

impl ListingRecord {
    pub const FIELD_NAMES: [&'static str; FIELD_COUNT] = [
        "Title",
        "Location",
        "AskingPrice",
        "GrossRevenue",
        "CashFlow",
        "EBITDA",
        "Established",
        "SellerFinancing",
        "Inventory",
        "FF&E",
        "Employees",
        "RealEstate",
        "Facilities",
        "Competition",
        "GrowthExpansion",
        "Financing",
        "SupportTraining",
        "ReasonForSelling",
        "Broker",
        "Price/Revenue Multiple",
        "Price/CashFlow Multiple",
        "Price/EBITDA Multiple",
        "Profit Margin %",
        "BusinessDescription",
    ];

    /// Values in `FIELD_NAMES` order.
    pub fn cells(&self) -> [Cell; FIELD_COUNT] {
        [
            self.title.as_ref().into(),
            self.location.as_ref().into(),
            self.asking_price.as_ref().into(),
            self.gross_revenue.as_ref().into(),
            self.cash_flow.as_ref().into(),
            self.ebitda.as_ref().into(),
            self.established.as_ref().into(),
            Cell::Text(yes_no_str(self.seller_financing).to_string()),
            self.inventory.as_ref().into(),
            self.ffe.as_ref().into(),
            self.employees.as_ref().into(),
            self.real_estate.as_ref().into(),
            self.facilities.as_ref().into(),
            self.competition.as_ref().into(),
            self.growth_expansion.as_ref().into(),
            self.financing.as_ref().into(),
            self.support_training.as_ref().into(),
            self.reason_for_selling.as_ref().into(),
            self.broker.as_ref().into(),
            self.price_revenue_multiple.into(),
            self.price_cash_flow_multiple.into(),
            self.price_ebitda_multiple.into(),
            self.profit_margin.into(),
            self.business_description.as_ref().into(),
        ]
    }
}

fn yes_no_str(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn yes_no<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(yes_no_str(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_field_names() {
        let record = ListingRecord {
            title: Some("Corner Bakery".into()),
            asking_price: Some(Financial::Numeric(1_250_000)),
            established: Some(Financial::Raw("circa 1990".into())),
            seller_financing: true,
            price_revenue_multiple: Some(2.0),
            ..Default::default()
        };

        let cells = record.cells();
        assert_eq!(cells.len(), ListingRecord::FIELD_NAMES.len());
        assert_eq!(cells[0], Cell::Text("Corner Bakery".into()));
        assert_eq!(cells[1], Cell::Empty);
        assert_eq!(cells[2], Cell::Integer(1_250_000));
        assert_eq!(cells[6], Cell::Text("circa 1990".into()));
        assert_eq!(cells[7], Cell::Text("Yes".into()));
        assert_eq!(cells[19], Cell::Decimal(2.0));
    }

    #[test]
    fn decimals_keep_one_place_when_whole() {
        assert_eq!(Cell::Decimal(2.0).to_string(), "2.0");
        assert_eq!(Cell::Decimal(0.33).to_string(), "0.33");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn json_keys_match_field_names_in_order() {
        let json = serde_json::to_string(&ListingRecord::default()).unwrap();

        let positions: Vec<usize> = ListingRecord::FIELD_NAMES
            .iter()
            .map(|name| json.find(&format!("\"{name}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains(r#""SellerFinancing":"No""#));
        assert!(json.contains(r#""AskingPrice":null"#));
    }
}
