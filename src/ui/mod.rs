mod helpers;
pub mod layout;
pub mod state;
pub mod views;

use crate::app::{Event, Trainer};
use crate::config::TrainerConfig;
use crate::data::PendingLoad;
use crate::model::{LearnMode, UiMode};
use crate::presenter::Presenter;
use crate::view_models::LoadStatus;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use state::ViewState;
use std::time::Duration;

/// The eframe application: owns the trainer and the in-flight dataset load.
pub struct TrainerApp {
    trainer: Trainer<ViewState>,
    config: TrainerConfig,
    pending: Option<PendingLoad>,
}

impl TrainerApp {
    pub fn new(config: TrainerConfig) -> Self {
        let trainer = Trainer::new(ViewState::default(), config.learn_mode);
        let mut app = Self {
            trainer,
            config,
            pending: None,
        };
        app.start_loading();
        app
    }

    /// Starts a load unless one is running or the dataset is already in.
    pub fn start_loading(&mut self) {
        if self.trainer.is_loaded() || self.pending.is_some() {
            return;
        }
        self.trainer
            .presenter_mut()
            .set_load_status(LoadStatus::Loading);
        self.pending = Some(PendingLoad::spawn(self.config.dataset_source.clone()));
    }

    pub fn poll_dataset(&mut self) {
        let Some(result) = self.pending.as_ref().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending = None;
        match result {
            Ok(dataset) => self.trainer.dataset_loaded(dataset),
            Err(err) => self.trainer.dataset_failed(&err),
        }
    }

    fn subtitle(&self) -> String {
        let mode = match self.trainer.learn_mode() {
            LearnMode::ById => "typ het nummer",
            LearnMode::ByValue => "typ de omschrijving",
        };
        let view = self.trainer.presenter();
        match view.mode {
            UiMode::ChapterSelect => format!("Hoofdstukken · {mode}"),
            UiMode::Learning => format!("Oefenen {} · {mode}", view.progress.label()),
        }
    }
}

impl App for TrainerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_dataset();
        if self.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(ctx, &self.subtitle());
        bottom_panel(ctx);

        let mut events: Vec<Event> = Vec::new();
        let mut retry = false;
        let view = self.trainer.presenter_mut();

        // dispatch to the view for the current mode
        match view.mode {
            UiMode::ChapterSelect => match view.load_status {
                LoadStatus::Ready => views::chapter_select::ui_chapter_select(view, ctx, &mut events),
                _ => retry = views::loading::ui_loading(view, ctx),
            },
            UiMode::Learning => views::learning::ui_learning(view, ctx, &mut events),
        }

        for event in events {
            self.trainer.handle(event);
        }
        if retry {
            self.start_loading();
        }
    }
}
