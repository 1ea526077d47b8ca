use super::lookup::{LookupRequest, StrokesGainedLookup};
use crate::error::LookupError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use std::time::Duration;

pub const DEFAULT_CALCULATOR_URL: &str = "https://www.golfity.com/strokes-gained-calculator";
pub const DEFAULT_WAIT: Duration = Duration::from_secs(10);

/// Form inputs that must be on the calculator page, in fill order.
pub const FORM_FIELDS: [&str; 4] = ["start_lie", "start_distance", "end_lie", "end_distance"];
pub const RESULT_ELEMENT: &str = "strokes-gained-result";

/// Strokes-gained lookup against the public calculator page.
///
/// The form is submitted as a GET of the page with the four inputs as query
/// parameters, and the answer is read from `#strokes-gained-result` in the
/// returned page. Every call builds its own HTTP session, so nothing is
/// shared between rows and the session is dropped on every return path.
/// Each remote stage is bounded by `wait`.
#[derive(Debug, Clone)]
pub struct GolfityClient {
    url: String,
    wait: Duration,
    use_system_proxy: bool,
}

impl GolfityClient {
    #[must_use]
    pub fn new(url: impl Into<String>, wait: Duration) -> Self {
        Self {
            url: url.into(),
            wait,
            use_system_proxy: true,
        }
    }

    /// Connect straight to the calculator, ignoring any proxy settings in
    /// the environment.
    #[must_use]
    pub fn direct(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    async fn fetch(
        &self,
        client: &Client,
        url: Url,
        stage: &'static str,
    ) -> Result<String, LookupError> {
        let pending = async {
            client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        };
        tokio::time::timeout(self.wait, pending)
            .await
            .map_err(|_| LookupError::Timeout {
                stage,
                secs: self.wait.as_secs(),
            })?
            .map_err(LookupError::from)
    }
}

#[async_trait]
impl StrokesGainedLookup for GolfityClient {
    async fn evaluate(&self, request: &LookupRequest) -> Result<String, LookupError> {
        let mut builder = Client::builder().timeout(self.wait);
        if !self.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        let page_url =
            Url::parse(&self.url).map_err(|e| LookupError::Transport(format!("{}: {e}", self.url)))?;

        let page = self.fetch(&client, page_url, "calculator page").await?;
        check_form(&page)?;

        let submit_url = Url::parse_with_params(&self.url, &form_params(request))
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let result_page = self.fetch(&client, submit_url, RESULT_ELEMENT).await?;
        extract_result(&result_page)
    }
}

#[must_use]
pub fn form_params(request: &LookupRequest) -> [(&'static str, String); 4] {
    [
        (FORM_FIELDS[0], request.start_lie.calculator_code().to_string()),
        (FORM_FIELDS[1], request.start_distance.to_string()),
        (FORM_FIELDS[2], request.end_lie.calculator_code().to_string()),
        (FORM_FIELDS[3], request.end_distance.to_string()),
    ]
}

fn id_selector(id: &str) -> Result<Selector, LookupError> {
    Selector::parse(&format!("#{id}")).map_err(|e| LookupError::Selector(format!("{e:?}")))
}

/// Checks the page has each form input, in fill order.
///
/// # Errors
///
/// Will return `Err` naming the first input that is missing
pub fn check_form(page: &str) -> Result<(), LookupError> {
    let document = Html::parse_document(page);
    for field in FORM_FIELDS {
        let selector = id_selector(field)?;
        if document.select(&selector).next().is_none() {
            return Err(LookupError::MissingElement(field));
        }
    }
    Ok(())
}

/// Text of the result element, trimmed.
///
/// # Errors
///
/// Will return `Err` if the result element is not on the page
pub fn extract_result(page: &str) -> Result<String, LookupError> {
    let document = Html::parse_document(page);
    let selector = id_selector(RESULT_ELEMENT)?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or(LookupError::MissingElement(RESULT_ELEMENT))
}
