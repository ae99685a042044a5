use aspect_trainer::{TrainerApp, TrainerConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainerConfig::resolve();
    log::info!(
        "dataset: {}, learn mode: {}",
        config.dataset_source,
        config.learn_mode
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Kenmerkende aspecten",
        options,
        Box::new(move |_cc| Ok(Box::new(TrainerApp::new(config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("no <canvas id=\"the_canvas_id\"> in the page");
            return;
        };

        let config = TrainerConfig::resolve();
        log::info!(
            "dataset: {}, learn mode: {}",
            config.dataset_source,
            config.learn_mode
        );

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(TrainerApp::new(config)))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
