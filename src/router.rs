use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{csv_response, html_response, redirect, xlsx_response, ResultResp};
use crate::spreadsheets::{export_listings_csv, export_listings_xlsx};
use crate::templates::pages::{index_page, IndexVm};
use astra::Request;
use std::io::Read;

const EXPORT_BASENAME: &str = "biz_comparison";

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => index(app),
        ("POST", "/") => add_listing(&mut req, app),
        ("GET", "/export/csv") => export_csv(app),
        ("GET", "/export/xlsx") => export_xlsx(app),
        ("GET", "/reset") => reset(app),
        _ => Err(ServerError::NotFound),
    }
}

fn index(app: &App) -> ResultResp {
    let mut session = app.session()?;
    let vm = IndexVm {
        flashes: session.take_flashes(),
        listings: session.records(),
    };

    html_response(index_page(&vm))
}

fn add_listing(req: &mut Request, app: &App) -> ResultResp {
    let form = parse_form(req)?;
    let raw_url = form
        .into_iter()
        .find(|(k, _)| k == "url")
        .map(|(_, v)| v)
        .unwrap_or_default();

    let Some(url) = app.validate_listing_url(&raw_url) else {
        tracing::info!(url = %raw_url, "rejected listing url");
        app.session()?
            .flash("Please enter a valid BizBuySell listing URL.");
        return redirect("/");
    };

    // Fetch without holding the session lock.
    let result = app.scrape(&url);

    let mut session = app.session()?;
    match result {
        Ok(record) => {
            tracing::info!(%url, title = ?record.title, "added listing");
            session.push(record);
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "scrape failed");
            session.flash(format!("Error scraping listing: {e}"));
        }
    }

    redirect("/")
}

fn export_csv(app: &App) -> ResultResp {
    let mut session = app.session()?;
    if session.is_empty() {
        session.flash("No data to export.");
        return redirect("/");
    }

    let buffer = export_listings_csv(session.records())?;
    csv_response(buffer, &format!("{EXPORT_BASENAME}.csv"))
}

fn export_xlsx(app: &App) -> ResultResp {
    let mut session = app.session()?;
    if session.is_empty() {
        session.flash("No data to export.");
        return redirect("/");
    }

    let buffer = export_listings_xlsx(session.records())?;
    xlsx_response(buffer, &format!("{EXPORT_BASENAME}.xlsx"))
}

fn reset(app: &App) -> ResultResp {
    let mut session = app.session()?;
    let dropped = session.len();
    session.clear();
    session.flash("Session reset. All listings cleared.");
    tracing::info!(dropped, "session reset");

    redirect("/")
}

/// Decodes an `application/x-www-form-urlencoded` request body.
fn parse_form(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}
