// templates/pages/index.rs

use crate::domain::ListingRecord;
use crate::templates::{card, desktop_layout, flash_list};
use maud::{html, Markup};

pub struct IndexVm<'a> {
    pub flashes: Vec<String>,
    pub listings: &'a [ListingRecord],
}

pub fn index_page(vm: &IndexVm) -> Markup {
    desktop_layout(
        "Compare Listings",
        html! {
            main class="container" {
                h1 { "Compare Business Listings" }

                (flash_list(&vm.flashes))

                (card("Add a listing", html! {
                    form action="/" method="post" style="display: flex; gap: 10px; align-items: center;" {
                        label for="url" class="sr-only" { "Listing URL" }
                        input
                            type="url"
                            id="url"
                            name="url"
                            placeholder="https://www.bizbuysell.com/business-opportunity/..."
                            required
                            style="flex: 1; padding: 8px; font-size: 16px;";
                        button type="submit" style="padding: 8px 16px; font-size: 16px; cursor: pointer;" { "Scrape" }
                    }
                }))

                (listings_card(vm.listings))
            }
        },
    )
}

pub fn listings_card(listings: &[ListingRecord]) -> Markup {
    html! {
        section class="card" id="listings" {
            h3 { "Listings (" (listings.len()) ")" }

            @if listings.is_empty() {
                p { "No listings yet. Paste a BizBuySell URL above." }
            } @else {
                p style="display: flex; gap: 1rem;" {
                    a href="/export/csv" { "Download CSV" }
                    a href="/export/xlsx" { "Download Excel" }
                    a href="/reset" style="color: #dc2626;" { "Reset session" }
                }
                div style="overflow-x: auto;" {
                    table style="border-collapse: collapse; font-size: 0.9em;" {
                        thead {
                            tr {
                                @for name in ListingRecord::FIELD_NAMES {
                                    th style="padding: 8px; text-align: left; border-bottom: 2px solid #e5e7eb; white-space: nowrap;" { (name) }
                                }
                            }
                        }
                        tbody {
                            @for listing in listings {
                                tr {
                                    @for cell in listing.cells() {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6; vertical-align: top; white-space: pre-line;" { (cell) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
