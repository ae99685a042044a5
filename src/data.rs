// src/data.rs

use crate::model::Dataset;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use thiserror::Error;

/// Errors produced while fetching or parsing the chapter document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP {status} while loading `{url}`")]
    Status { status: u16, url: String },
    #[error("fetching `{url}` failed: {message}")]
    Fetch { url: String, message: String },
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("the loader stopped before delivering a result")]
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Guesses the document format from the source path, ignoring any query string.
    pub fn from_source(source: &str) -> Self {
        let path = source.split(['?', '#']).next().unwrap_or(source);
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            DatasetFormat::Yaml
        } else {
            DatasetFormat::Json
        }
    }
}

pub fn parse_dataset(text: &str, format: DatasetFormat) -> Result<Dataset, LoadError> {
    let dataset = match format {
        DatasetFormat::Json => serde_json::from_str(text)?,
        DatasetFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(dataset)
}

#[cfg(not(target_arch = "wasm32"))]
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads the dataset from a file path or an http(s) URL. Blocking.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dataset(source: &str) -> Result<Dataset, LoadError> {
    let format = DatasetFormat::from_source(source);
    let text = if is_remote(source) {
        fetch_text_blocking(source)?
    } else {
        std::fs::read_to_string(source).map_err(|source_err| LoadError::Io {
            path: source.to_string(),
            source: source_err,
        })?
    };
    parse_dataset(&text, format)
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_text_blocking(url: &str) -> Result<String, LoadError> {
    let fetch_err = |err: reqwest::Error| LoadError::Fetch {
        url: url.to_string(),
        message: err.to_string(),
    };

    let response = reqwest::blocking::get(url).map_err(fetch_err)?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    response.text().map_err(fetch_err)
}

/// Loads the dataset with the browser fetch API. Relative URLs resolve against the page.
#[cfg(target_arch = "wasm32")]
pub async fn load_dataset(source: &str) -> Result<Dataset, LoadError> {
    let format = DatasetFormat::from_source(source);
    let text = fetch_text(source).await?;
    parse_dataset(&text, format)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let fetch_err = |message: String| LoadError::Fetch {
        url: url.to_string(),
        message,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| fetch_err(format!("could not build request: {:?}", err)))?;
    let window = web_sys::window().ok_or_else(|| fetch_err("no window in this context".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| fetch_err(format!("{:?}", err)))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| fetch_err("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let promise = response
        .text()
        .map_err(|err| fetch_err(format!("{:?}", err)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| fetch_err(format!("{:?}", err)))?;
    text.as_string()
        .ok_or_else(|| fetch_err("response.text() did not yield a string".into()))
}

/// A dataset load running off the UI event. Poll it once per frame.
pub struct PendingLoad {
    rx: Receiver<Result<Dataset, LoadError>>,
}

impl PendingLoad {
    pub fn spawn(source: String) -> Self {
        let (tx, rx) = mpsc::channel();
        log::info!("loading chapters from {source}");

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(load_dataset(&source));
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(load_dataset(&source).await);
        });

        Self { rx }
    }

    /// `None` while the load is still running.
    pub fn poll(&self) -> Option<Result<Dataset, LoadError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "chapters": [
            { "title": "Tijd van jagers en boeren", "aspects": [
                { "id": "1", "value": "De levenswijze van jagers-verzamelaars" },
                { "id": "2", "value": "Het ontstaan van landbouw" }
            ] },
            { "title": "Tijd van Grieken en Romeinen", "aspects": [
                { "id": "3", "value": "De ontwikkeling van het denken over burgerschap" }
            ] }
        ]
    }"#;

    #[test]
    fn parses_json_document() {
        let dataset = parse_dataset(SAMPLE_JSON, DatasetFormat::Json).expect("json ok");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.chapters[0].aspects.len(), 2);
        assert_eq!(dataset.chapters[1].aspects[0].id, "3");
    }

    #[test]
    fn bundled_content_parses() {
        let text = include_str!("../content/kenmerkendeAspecten.json");
        let dataset = parse_dataset(text, DatasetFormat::Json).expect("bundled content");
        assert!(!dataset.is_empty());
        assert!(dataset.chapters.iter().all(|c| !c.aspects.is_empty()));
    }

    #[test]
    fn parses_yaml_document() {
        let yaml = "chapters:\n  - title: A\n    aspects:\n      - id: a1\n        value: v1\n  - title: Empty\n";
        let dataset = parse_dataset(yaml, DatasetFormat::Yaml).expect("yaml ok");
        assert_eq!(dataset.chapters[0].aspects[0].value, "v1");
        assert!(dataset.chapters[1].aspects.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = parse_dataset("{\"chapters\": 3}", DatasetFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(DatasetFormat::from_source("content/a.json"), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_source("content/a.YML"), DatasetFormat::Yaml);
        assert_eq!(
            DatasetFormat::from_source("https://x.test/a.yaml?v=2"),
            DatasetFormat::Yaml
        );
        assert_eq!(DatasetFormat::from_source("content/noext"), DatasetFormat::Json);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_reports_io_error() {
        let err = load_dataset("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn pending_load_delivers_result() {
        let pending = PendingLoad::spawn("definitely/not/here.json".into());
        let result = loop {
            if let Some(result) = pending.poll() {
                break result;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        };
        assert!(result.is_err());
    }
}
