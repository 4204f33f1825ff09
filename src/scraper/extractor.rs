// extractor.rs
use crate::domain::logic::apply_derived_ratios;
use crate::domain::{Financial, ListingRecord};
use crate::scraper::models::ListingJsonLd;
use crate::scraper::ScraperError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

pub const ASKING_PRICE: &str = "Asking Price:";
pub const GROSS_REVENUE: &str = "Gross Revenue:";
pub const CASH_FLOW: &str = "Cash Flow (SDE):";
pub const EBITDA: &str = "EBITDA:";
pub const ESTABLISHED: &str = "Established:";

const NOT_DISCLOSED: &str = "Not Disclosed";

/// Pulls a [`ListingRecord`] out of a BizBuySell listing page.
///
/// Every rule tolerates a missing element by leaving its field empty, so a
/// half-rendered or redesigned page still yields whatever can be found.
pub struct ListingExtractor {
    title: Selector,
    location: Selector,
    span: Selector,
    normal_span: Selector,
    description: Selector,
    details: Selector,
    dt: Selector,
    dd: Selector,
    json_ld: Selector,
    seller_financing: Regex,
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{css}: {e:?}")))
}

/// Text nodes under `el`, each trimmed, blanks dropped, joined with `sep`.
fn stripped_text(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Normalizes a currency/number string like `$1,250,000`.
///
/// "Not Disclosed" is absent. Text that still isn't a number once everything
/// but digits and `.` is removed comes back as [`Financial::Raw`].
pub fn parse_financial(text: &str) -> Option<Financial> {
    if text.contains(NOT_DISCLOSED) {
        return None;
    }

    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        // No sign survives the filter, so only the upper bound needs checking.
        Ok(v) if v.is_finite() && v < i64::MAX as f64 => Some(Financial::Numeric(v.trunc() as i64)),
        _ => Some(Financial::Raw(text.to_string())),
    }
}

impl ListingExtractor {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            title: selector("h1.bfsTitle")?,
            location: selector("span.f-l.cs-800.flex-center.g8.opacity-70")?,
            span: selector("span")?,
            normal_span: selector("span.normal")?,
            description: selector("div.businessDescription")?,
            details: selector("dl.listingProfile_details")?,
            dt: selector("dt")?,
            dd: selector("dd")?,
            json_ld: selector(r#"script[type="application/ld+json"]"#)?,
            seller_financing: Regex::new(r"(?i)Seller\s+Financing\s+Available")?,
        })
    }

    /// Parses raw page HTML and extracts from it.
    pub fn extract_html(&self, html: &str) -> ListingRecord {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    pub fn extract(&self, doc: &Html) -> ListingRecord {
        let mut details = self.details(doc);

        let mut record = ListingRecord {
            title: self.title(doc),
            location: self.location(doc),
            asking_price: self.financial(doc, ASKING_PRICE),
            gross_revenue: self.financial(doc, GROSS_REVENUE),
            cash_flow: self.financial(doc, CASH_FLOW),
            ebitda: self.financial(doc, EBITDA),
            established: self.financial(doc, ESTABLISHED),
            seller_financing: self.seller_financing(doc),
            inventory: details.remove("Inventory"),
            ffe: details.remove("Furniture, Fixtures, & Equipment (FF&E)"),
            employees: details.remove("Employees"),
            real_estate: details.remove("Real Estate"),
            facilities: details.remove("Facilities"),
            competition: details.remove("Competition"),
            growth_expansion: details.remove("Growth & Expansion"),
            financing: details.remove("Financing"),
            support_training: details.remove("Support & Training"),
            reason_for_selling: details.remove("Reason for Selling"),
            broker: self.broker(doc),
            business_description: self.business_description(doc),
            ..Default::default()
        };

        if !details.is_empty() {
            let labels: Vec<&String> = details.keys().collect();
            tracing::debug!(?labels, "ignoring unknown detail labels");
        }

        apply_derived_ratios(&mut record);

        tracing::debug!(
            title = ?record.title,
            asking_price = ?record.asking_price,
            broker = ?record.broker,
            "extracted listing"
        );

        record
    }

    pub fn title(&self, doc: &Html) -> Option<String> {
        doc.select(&self.title)
            .next()
            .map(|el| stripped_text(el, ""))
    }

    pub fn location(&self, doc: &Html) -> Option<String> {
        doc.select(&self.location)
            .next()
            .map(|el| stripped_text(el, ""))
    }

    /// Value of the `<span>label</span><span>value</span>` pair for `label`.
    pub fn financial(&self, doc: &Html, label: &str) -> Option<Financial> {
        let label_span = doc
            .select(&self.span)
            .find(|el| el.text().collect::<String>().trim() == label)?;

        let value_span = label_span
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "span")
            .or_else(|| {
                // Some layouts nest the value in the label's parent instead.
                label_span
                    .parent()
                    .and_then(ElementRef::wrap)
                    .and_then(|parent| parent.select(&self.normal_span).next())
            })?;

        parse_financial(&stripped_text(value_span, ""))
    }

    /// Matches against the page's whole text, so the phrase still counts when
    /// it is split across inline elements like `<b>`.
    pub fn seller_financing(&self, doc: &Html) -> bool {
        let text: String = doc
            .root_element()
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let in_code = node
                    .parent()
                    .and_then(|p| p.value().as_element().map(|e| e.name()))
                    .is_some_and(|name| name == "script" || name == "style");

                (!in_code).then_some(&**text)
            })
            .collect();

        self.seller_financing.is_match(&text)
    }

    /// Description paragraphs, one per line.
    pub fn business_description(&self, doc: &Html) -> Option<String> {
        doc.select(&self.description)
            .next()
            .map(|el| stripped_text(el, "\n"))
    }

    /// Term/description pairs from the listing's detail `<dl>`, keyed by term
    /// text without its trailing colon.
    ///
    /// Terms and descriptions are paired by position. If the counts differ
    /// the unmatched tail is dropped.
    pub fn details(&self, doc: &Html) -> HashMap<String, String> {
        let mut details = HashMap::new();
        let Some(dl) = doc.select(&self.details).next() else {
            return details;
        };

        let terms: Vec<ElementRef> = dl.select(&self.dt).collect();
        let descriptions: Vec<ElementRef> = dl.select(&self.dd).collect();
        if terms.len() != descriptions.len() {
            tracing::debug!(
                terms = terms.len(),
                descriptions = descriptions.len(),
                "detail list is unbalanced, dropping unmatched entries"
            );
        }

        for (dt, dd) in terms.into_iter().zip(descriptions) {
            let label = stripped_text(dt, "");
            let label = label.trim_end_matches(':').trim_end();
            details.insert(label.to_string(), stripped_text(dd, "\n"));
        }

        details
    }

    /// Broker name and brokerage from the first JSON-LD block that has an
    /// `offers.offeredBy` entry. Blocks that aren't valid JSON are skipped.
    pub fn broker(&self, doc: &Html) -> Option<String> {
        let offered_by = doc
            .select(&self.json_ld)
            .filter_map(|script| {
                let json = script.text().collect::<String>();
                match serde_json::from_str::<ListingJsonLd>(&json) {
                    Ok(block) => block.offers.and_then(|o| o.offered_by),
                    Err(e) => {
                        tracing::trace!(error = %e, "skipping JSON-LD block");
                        None
                    }
                }
            })
            .next()?;

        offered_by.display_name()
    }
}
