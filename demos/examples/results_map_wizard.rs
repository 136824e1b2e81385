// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A saved-search wizard followed by a map of its geotagged results.
//!
//! This example shows how a host drives:
//! - `overlook_wizard` for page order, button enablement, and validation wiring,
//! - `overlook_geo` for the map's bounds, center, and coordinate labels.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p overlook_demos --example results_map_wizard`

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use overlook_geo::{GeoSample, Located, compute_bounds, compute_centroid, format_lat_long};
use overlook_wizard::{
    NavActions, Outcome, PageValues, Validation, Validity, Wizard, WizardError, WizardPage,
};

/// A page whose value is a line of text typed by the user.
#[derive(Debug)]
struct TextPage {
    key: &'static str,
    title: &'static str,
    text: String,
    optional: bool,
}

impl TextPage {
    fn required(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            text: String::new(),
            optional: false,
        }
    }
}

impl WizardPage<&'static str> for TextPage {
    type Value = String;

    fn key(&self) -> &&'static str {
        &self.key
    }

    fn title(&self) -> &str {
        self.title
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn value(&self) -> Option<String> {
        (!self.text.is_empty()).then(|| self.text.clone())
    }

    fn validate(&self, _values: &PageValues<&'static str, String>) -> impl Future<Output = Validation> {
        let empty = self.text.trim().is_empty();
        async move {
            if empty {
                Err("this field is required".to_owned())
            } else {
                Ok(())
            }
        }
    }

    fn about_to_show(&mut self, values: &PageValues<&'static str, String>) {
        if self.key == "name"
            && self.text.is_empty()
            && let Some(query) = values.get(&"query")
        {
            self.text = format!("Results for {query}");
        }
    }
}

/// Poll a validation future that is expected to be ready immediately.
fn resolve<F: Future>(fut: F) -> Option<F::Output> {
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
        Poll::Ready(out) => Some(out),
        Poll::Pending => None,
    }
}

fn print_buttons(wizard: &Wizard<&'static str>, validity: &Validity<&'static str>) {
    let actions = wizard.actions(validity);
    let steps: Vec<_> = wizard
        .steps(validity)
        .into_iter()
        .map(|s| if s.is_current() { format!("[{}]", s.title) } else { s.title })
        .collect();
    println!(
        "{}  prev={} next={} finish={} primary={:?}",
        steps.join(" > "),
        actions.contains(NavActions::PREVIOUS),
        actions.contains(NavActions::NEXT),
        actions.contains(NavActions::FINISH),
        actions.primary(),
    );
}

fn validate(
    wizard: &Wizard<&'static str>,
    pages: &[TextPage],
    validity: &mut Validity<&'static str>,
) -> Result<(), WizardError<&'static str>> {
    if let Some(result) = resolve(wizard.validate_current(pages)?) {
        if let Err(message) = &result {
            println!("  {}: {message}", wizard.current_page().title);
        }
        validity.record(*wizard.current(), &result);
    }
    Ok(())
}

fn main() -> Result<(), WizardError<&'static str>> {
    env_logger::init();

    let mut pages = vec![
        TextPage::required("query", "Query"),
        TextPage::required("name", "Name"),
        TextPage {
            optional: true,
            ..TextPage::required("notify", "Notifications")
        },
    ];
    let mut wizard = Wizard::from_pages(&pages)?;
    let mut validity = Validity::new();
    wizard.prepare_current(&mut pages)?;

    // Nothing typed yet: the query page fails validation.
    validate(&wizard, &pages, &mut validity)?;
    print_buttons(&wizard, &validity);

    pages[0].text = "harbour".to_owned();
    validate(&wizard, &pages, &mut validity)?;
    print_buttons(&wizard, &validity);

    if wizard.next(&validity)? {
        // The name page pre-fills itself from the query.
        wizard.prepare_current(&mut pages)?;
    }
    validate(&wizard, &pages, &mut validity)?;
    print_buttons(&wizard, &validity);

    let values = wizard.collect_values(&pages);
    match wizard.finish()? {
        Outcome::Completed => {
            for (key, value) in values.iter() {
                println!("  {key} = {value}");
            }
        }
        Outcome::Cancelled => println!("  cancelled"),
    }

    let hits = [
        GeoSample::new(18.9753, 72.8258),
        GeoSample::new(-33.8688, 151.2093),
        GeoSample::new(39.9167, 116.3833),
        GeoSample {
            latitude: Some(51.5072),
            longitude: None,
        },
    ];
    let bounds = compute_bounds(&hits);
    let center = compute_centroid(&hits);
    println!("fit map to {:?}", bounds.corners());
    println!("center map on {}", format_lat_long(center.lat, center.lon));
    for hit in &hits {
        let pos = hit.position();
        println!("  marker at {}", format_lat_long(pos.lat, pos.lon));
    }
    Ok(())
}
