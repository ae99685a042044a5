use crate::model::LearnMode;

pub const DEFAULT_DATASET: &str = "content/kenmerkendeAspecten.json";

#[cfg(not(target_arch = "wasm32"))]
const DATASET_ENV: &str = "ASPECT_TRAINER_DATASET";
#[cfg(not(target_arch = "wasm32"))]
const MODE_ENV: &str = "ASPECT_TRAINER_MODE";

/// Startup settings, resolved once before the app is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerConfig {
    pub dataset_source: String,
    pub learn_mode: LearnMode,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            dataset_source: DEFAULT_DATASET.to_string(),
            learn_mode: LearnMode::default(),
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Unknown mode strings fall back to the default.
pub fn parse_mode(value: Option<String>) -> LearnMode {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            log::warn!("{err}, using `{}`", LearnMode::default());
            LearnMode::default()
        }),
        None => LearnMode::default(),
    }
}

/// Value of `key` in a query string (with or without the leading `?`).
/// Does not percent-decode.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k == key { normalize(v) } else { None }
    })
}

#[cfg(not(target_arch = "wasm32"))]
impl TrainerConfig {
    /// First CLI argument, then `ASPECT_TRAINER_DATASET`, then the default path.
    pub fn resolve() -> Self {
        let dataset_source = std::env::args()
            .nth(1)
            .and_then(|arg| normalize(&arg))
            .or_else(|| std::env::var(DATASET_ENV).ok().and_then(|v| normalize(&v)))
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());
        let learn_mode = parse_mode(std::env::var(MODE_ENV).ok().and_then(|v| normalize(&v)));

        Self {
            dataset_source,
            learn_mode,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TrainerConfig {
    pub fn resolve() -> Self {
        let dataset_source = option_env!("ASPECT_TRAINER_DATASET")
            .and_then(normalize)
            .or_else(|| from_querystring("dataset"))
            .or_else(dataset_from_meta)
            .or_else(|| from_local_storage("aspect_trainer_dataset"))
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());
        let learn_mode = parse_mode(
            from_querystring("mode").or_else(|| from_local_storage("aspect_trainer_mode")),
        );

        Self {
            dataset_source,
            learn_mode,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn from_querystring(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let raw = query_param(&search, key)?;
    let decoded = js_sys::decode_uri_component(&raw).ok()?;
    decoded.as_string().as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn dataset_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='aspect-trainer-dataset']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn from_local_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?.as_deref().and_then(normalize)
}
