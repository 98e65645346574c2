//! Desktop UI and state management.
//! Handles deck management, the group dashboard, every session screen and the
//! one-second ticker that drives the engine's countdown.

use chrono::{DateTime, Local, Utc};
use eframe::egui;
use lexiquest::config::AppConfig;
use lexiquest::database::db;
use lexiquest::error::EngineError;
use lexiquest::engine::{
    ArcadeMode, ArcadeOutcome, ArcadeState, ArcadeStatus, Effect, Engine, FacetId, IntroStep, Prompt, Stage,
    Status, ThinkPhase, Update,
};
use lexiquest::export::json::{export_json_to_path, export_progress_to_path, import_json};
use lexiquest::models::{Card, CardId, Deck, DeckSet, Progress};
use lexiquest::speech::{LogSpeaker, Speaker, voice_effects};
use rusqlite::Connection;
use std::time::{Duration, Instant};
use tracing::warn;

/// Application screen states
#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum AppScreen {
    #[default]
    Manager,
    Dashboard,
    Session,
}

/// Everything a click can ask for. Collected while drawing, applied after.
enum Action {
    SelectDeck(usize),
    OpenDeck(usize),
    CreateDeck,
    AddCard,
    DeleteCard(CardId),
    Import,
    Export(usize),
    ExportProgress,
    BackToManager,
    StartGroup(usize),
    StartArcade(ArcadeMode),
    AdvanceIntro,
    SelectFacet(FacetId),
    AnswerQuiz(CardId),
    SubmitTyping,
    RevealThink,
    VoteThink(bool),
    ChooseArcade(CardId),
    SubmitArcadeTyping,
    Repeat(String),
    ExitSession,
    BackToDashboard,
}

pub struct LexiquestApp {
    conn: Connection,
    config: AppConfig,
    all_decks: DeckSet,
    selected_deck_index: Option<usize>,
    new_deck_name: String,
    new_front: String,
    new_back: String,
    search: String,

    current_screen: AppScreen,
    engine: Option<Engine>,
    last_played: Option<DateTime<Utc>>,
    typed: String,
    celebrating: bool,
    speaker: LogSpeaker,
    last_tick: Instant,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    message: Option<String>,
}

/// Formats a UTC timestamp in local time for the dashboard
fn format_last_played(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "never".to_string(),
    }
}

impl eframe::App for LexiquestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_timer(ctx);

        let mut actions = Vec::new();
        match self.current_screen {
            AppScreen::Manager => self.render_manager(ctx, &mut actions),
            AppScreen::Dashboard => self.render_dashboard(ctx, &mut actions),
            AppScreen::Session => self.render_session(ctx, &mut actions),
        }
        for action in actions {
            self.apply(action);
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                        }
                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            if self.allowed_to_close {
                self.apply(Action::ExitSession);
            }
        }

        if let Some(message) = &self.message {
            let mut dismissed = false;
            egui::Window::new("Lexiquest")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message.as_str());
                    ui.add_space(10.0);
                    dismissed = ui.button("OK").clicked();
                });
            if dismissed {
                self.message = None;
            }
        }
    }
}

impl LexiquestApp {
    pub fn new(deck_set: DeckSet, conn: Connection, config: AppConfig) -> Self {
        let has_decks = !deck_set.decks.is_empty();
        Self {
            conn,
            config,
            all_decks: deck_set,
            selected_deck_index: has_decks.then_some(0),
            new_deck_name: String::new(),
            new_front: String::new(),
            new_back: String::new(),
            search: String::new(),
            current_screen: AppScreen::Manager,
            engine: None,
            last_played: None,
            typed: String::new(),
            celebrating: false,
            speaker: LogSpeaker::new(),
            last_tick: Instant::now(),
            show_confirmation_dialog: false,
            allowed_to_close: false,
            message: None,
        }
    }

    /// Feeds one engine tick per whole elapsed second while a countdown runs.
    fn drive_timer(&mut self, ctx: &egui::Context) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if engine.timer_remaining().is_none() {
            self.last_tick = Instant::now();
            return;
        }

        let whole = self.last_tick.elapsed().as_secs();
        let mut updates = Vec::new();
        for _ in 0..whole {
            updates.push(engine.tick());
        }
        self.last_tick += Duration::from_secs(whole);
        for update in updates {
            self.perform(update);
        }

        let until_next = Duration::from_secs(1).saturating_sub(self.last_tick.elapsed());
        ctx.request_repaint_after(until_next);
    }

    /// Runs an engine operation, restarting the tick clock when it started a
    /// fresh countdown.
    fn drive(&mut self, op: impl FnOnce(&mut Engine) -> Update) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let before = engine.timer_token();
        let update = op(engine);
        let after = engine.timer_token();
        if after.is_some() && after != before {
            self.last_tick = Instant::now();
        }
        self.perform(update);
    }

    fn perform(&mut self, update: Update) {
        voice_effects(&mut self.speaker, &update.effects);
        for effect in update.effects {
            match effect {
                Effect::Celebrate => self.celebrating = true,
                Effect::Checkpoint(progress) => self.save_checkpoint(progress),
                Effect::Speak(_) | Effect::Sound(_) => {}
            }
        }
    }

    fn save_checkpoint(&mut self, mut progress: Progress) {
        let Some(engine) = &self.engine else {
            return;
        };
        let now = Utc::now();
        progress.last_played_at = Some(now);
        self.last_played = Some(now);

        if let Err(e) = db::save_progress(&engine.deck().name, &progress, &self.conn) {
            warn!(error = %e, "saving progress failed");
            self.message = Some(format!("Saving progress failed: {e}"));
        }
    }

    fn open_deck(&mut self, deck_index: usize) {
        let Some(deck) = self.all_decks.decks.get(deck_index) else {
            return;
        };
        let progress = match db::load_progress(&deck.name, &self.conn) {
            Ok(progress) => progress,
            Err(e) => {
                warn!(deck = %deck.name, error = %e, "loading progress failed");
                self.message = Some(format!("Loading progress failed: {e}"));
                return;
            }
        };
        self.last_played = progress.last_played_at;

        match Engine::new(deck.clone(), progress, self.config.engine.clone()) {
            Ok(engine) => {
                self.engine = Some(engine);
                self.current_screen = AppScreen::Dashboard;
            }
            Err(e) => self.message = Some(format!("Cannot open '{}': {e}", deck.name)),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectDeck(i) => self.selected_deck_index = Some(i),
            Action::OpenDeck(i) => self.open_deck(i),
            Action::CreateDeck => self.create_deck(),
            Action::AddCard => self.add_card(),
            Action::DeleteCard(id) => self.delete_card(id),
            Action::Import => self.handle_import(),
            Action::Export(i) => self.handle_export(i),
            Action::ExportProgress => self.handle_progress_export(),
            Action::BackToManager => {
                self.apply(Action::ExitSession);
                self.engine = None;
                self.current_screen = AppScreen::Manager;
            }
            Action::StartGroup(index) => self.start(|engine| engine.start_group(index)),
            Action::StartArcade(mode) => self.start(|engine| engine.start_arcade(mode)),
            Action::AdvanceIntro => self.drive(Engine::advance_intro),
            Action::SelectFacet(facet) => self.drive(|engine| engine.select_match_facet(facet)),
            Action::AnswerQuiz(option) => self.drive(|engine| engine.answer_quiz(option)),
            Action::SubmitTyping => {
                let text = std::mem::take(&mut self.typed);
                self.drive(|engine| engine.submit_typing(&text));
            }
            Action::RevealThink => self.drive(Engine::reveal_think),
            Action::VoteThink(correct) => self.drive(|engine| engine.vote_think(correct)),
            Action::ChooseArcade(option) => self.drive(|engine| engine.choose_arcade_option(option)),
            Action::SubmitArcadeTyping => {
                let text = std::mem::take(&mut self.typed);
                self.drive(|engine| engine.submit_arcade_typing(&text));
            }
            Action::Repeat(text) => self.speaker.speak(&text),
            Action::ExitSession => {
                self.drive(Engine::exit_session);
                self.current_screen = if self.engine.is_some() {
                    AppScreen::Dashboard
                } else {
                    AppScreen::Manager
                };
            }
            Action::BackToDashboard => {
                self.celebrating = false;
                self.current_screen = AppScreen::Dashboard;
            }
        }
    }

    fn start(&mut self, op: impl FnOnce(&mut Engine) -> Result<Update, EngineError>) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        match op(engine) {
            Ok(update) => {
                self.typed.clear();
                self.celebrating = false;
                self.last_tick = Instant::now();
                self.current_screen = AppScreen::Session;
                self.perform(update);
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn create_deck(&mut self) {
        let name = self.new_deck_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        match db::new_deck(&name, &self.conn) {
            Ok(()) => {
                self.all_decks.decks.push(Deck {
                    name,
                    cards: Vec::new(),
                });
                self.selected_deck_index = Some(self.all_decks.decks.len() - 1);
                self.new_deck_name.clear();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn add_card(&mut self) {
        let Some(deck) = self.selected_deck_index.and_then(|i| self.all_decks.decks.get_mut(i)) else {
            return;
        };
        let (front, back) = (self.new_front.trim(), self.new_back.trim());
        if front.is_empty() || back.is_empty() {
            return;
        }

        let card = Card::new(front, back);
        match db::add_card(&deck.name, &card, &self.conn) {
            Ok(true) => {
                deck.cards.push(card);
                self.new_front.clear();
                self.new_back.clear();
            }
            Ok(false) => self.message = Some(format!("'{}' is already in this deck", card.front)),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn delete_card(&mut self, id: CardId) {
        match db::delete_card(id, &self.conn) {
            Ok(_) => {
                for deck in &mut self.all_decks.decks {
                    deck.cards.retain(|card| card.id != id);
                }
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Handles deck export to JSON file
    fn handle_export(&mut self, deck_index: usize) {
        let Some(deck) = self.all_decks.decks.get(deck_index) else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", deck.name))
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.message = Some(match export_json_to_path(deck, &path) {
                Ok(()) => format!("Deck '{}' exported successfully!", deck.name),
                Err(e) => format!("Export failed: {e}"),
            });
        }
    }

    fn handle_progress_export(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{} progress.json", engine.deck().name))
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            let mut progress = engine.progress();
            progress.last_played_at = self.last_played;
            self.message = Some(match export_progress_to_path(&progress, &path) {
                Ok(()) => "Progress exported successfully!".to_string(),
                Err(e) => format!("Export failed: {e}"),
            });
        }
    }

    /// Handles deck import from JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON files", &["json"]).pick_file() else {
            return;
        };

        let deck = match import_json(&path) {
            Ok(deck) => deck,
            Err(e) => {
                self.message = Some(format!(
                    "Import failed: {e}\n\nPlease check if the file has correct structure:\n{{\n  \"name\": \"Deck Name\",\n  \"cards\": [...]\n}}"
                ));
                return;
            }
        };

        if self.all_decks.contains(&deck.name) {
            self.message = Some(format!(
                "Deck '{}' already exists! Please rename it in the JSON file.",
                deck.name
            ));
            return;
        }
        if let Err(e) = db::save_deck(&deck, &self.conn) {
            self.message = Some(format!("Failed to import deck: {e}"));
            return;
        }

        self.message = Some(format!(
            "Deck '{}' imported successfully with {} cards!",
            deck.name,
            deck.len()
        ));
        self.all_decks.decks.push(deck);
    }

    /// Renders the deck manager: decks, cards, import/export and search
    fn render_manager(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Import Deck").clicked() {
                    actions.push(Action::Import);
                }
                if let Some(i) = self.selected_deck_index {
                    if ui.button("Export Selected Deck").clicked() {
                        actions.push(Action::Export(i));
                    }
                }
            });
            ui.separator();

            ui.heading("Create New Deck");
            ui.horizontal(|ui| {
                ui.label("Deck name:");
                ui.text_edit_singleline(&mut self.new_deck_name);
                if ui.button("Create Deck").clicked() {
                    actions.push(Action::CreateDeck);
                }
            });
            ui.separator();

            ui.heading(format!("Decks ({})", self.all_decks.decks.len()));
            egui::ScrollArea::vertical()
                .id_salt("decks_list")
                .max_height(150.0)
                .show(ui, |ui| {
                    for (i, deck) in self.all_decks.decks.iter().enumerate() {
                        let is_selected = self.selected_deck_index == Some(i);
                        ui.horizontal(|ui| {
                            let label = format!("{}. {} ({} cards)", i + 1, deck.name, deck.len());
                            if ui.selectable_label(is_selected, label).clicked() {
                                actions.push(Action::SelectDeck(i));
                            }
                            if ui.add_enabled(!deck.is_empty(), egui::Button::new("Learn")).clicked() {
                                actions.push(Action::OpenDeck(i));
                            }
                        });
                    }
                });
            ui.separator();

            let Some(deck) = self.selected_deck_index.and_then(|i| self.all_decks.decks.get(i)) else {
                ui.label("Select a deck to add cards");
                return;
            };

            ui.heading(format!("Selected Deck: {}", deck.name));
            egui::Grid::new("new_card").num_columns(2).show(ui, |ui| {
                ui.label("Word:");
                ui.text_edit_singleline(&mut self.new_front);
                ui.end_row();
                ui.label("Translation:");
                ui.text_edit_singleline(&mut self.new_back);
                ui.end_row();
            });
            if ui.button("Add Card").clicked() {
                actions.push(Action::AddCard);
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Search:");
                ui.text_edit_singleline(&mut self.search);
            });
            let cards: Vec<&Card> = if self.search.trim().is_empty() {
                deck.all_cards().iter().collect()
            } else {
                deck.search(&self.search)
            };

            ui.heading(format!("Cards ({} of {})", cards.len(), deck.len()));
            egui::ScrollArea::vertical()
                .id_salt("cards_list")
                .max_height(260.0)
                .show(ui, |ui| {
                    for card in cards {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}  →  {}", card.front, card.back));
                            if card.mistake_count > 0 {
                                ui.weak(format!("({} mistakes)", card.mistake_count));
                            }
                            if ui.small_button("Delete").clicked() {
                                actions.push(Action::DeleteCard(card.id));
                            }
                        });
                    }
                });
        });
    }

    /// Renders the group list and the arcade launcher for the open deck
    fn render_dashboard(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(engine) = &self.engine else {
            self.current_screen = AppScreen::Manager;
            return;
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Back to Decks").clicked() {
                    actions.push(Action::BackToManager);
                }
                if ui.button("Export Progress").clicked() {
                    actions.push(Action::ExportProgress);
                }
            });
            ui.heading(engine.deck().name.as_str());
            ui.label(format!("Last played: {}", format_last_played(self.last_played)));
            ui.separator();

            ui.heading("Groups");
            egui::ScrollArea::vertical()
                .id_salt("groups_list")
                .max_height(300.0)
                .show(ui, |ui| {
                    for index in 0..engine.group_count() {
                        let unlocked = engine.is_group_unlocked(index);
                        let marker = if engine.is_group_completed(index) {
                            "✔"
                        } else if unlocked {
                            "○"
                        } else {
                            "🔒"
                        };
                        let range = engine
                            .group_range(index)
                            .map(|(first, last)| format!("words {first}-{last}"))
                            .unwrap_or_default();

                        ui.horizontal(|ui| {
                            ui.label(format!("{marker} Group {} ({range})", index + 1));
                            if ui.add_enabled(unlocked, egui::Button::new("Start")).clicked() {
                                actions.push(Action::StartGroup(index));
                            }
                        });
                    }
                });
            ui.separator();

            ui.heading("Arcade");
            ui.horizontal_wrapped(|ui| {
                for mode in ArcadeMode::ALL {
                    if ui.button(mode.title()).clicked() {
                        actions.push(Action::StartArcade(mode));
                    }
                }
            });
        });
    }

    fn render_session(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(engine) = &self.engine else {
            self.current_screen = AppScreen::Manager;
            return;
        };
        let typed = &mut self.typed;
        let celebrating = self.celebrating;

        egui::CentralPanel::default().show(ctx, |ui| match engine.status() {
            Status::Idle => actions.push(Action::BackToDashboard),
            Status::Group(_) => {
                if let Some(session) = engine.group_session() {
                    ui.horizontal(|ui| {
                        ui.heading(format!("Group {}", session.group_index() + 1));
                        if !session.is_finished() && ui.button("Exit").clicked() {
                            actions.push(Action::ExitSession);
                        }
                    });
                    ui.separator();
                    render_stage(
                        ui,
                        session.stage(),
                        session.current_card(),
                        engine.timer_remaining(),
                        typed,
                        actions,
                    );
                    if session.is_finished() {
                        ui.heading(if celebrating { "🎉 Group complete!" } else { "Group complete!" });
                        if ui.button("Back to Dashboard").clicked() {
                            actions.push(Action::BackToDashboard);
                        }
                    }
                }
            }
            Status::Arcade(status) => {
                if let Some(session) = engine.arcade_session() {
                    ui.horizontal(|ui| {
                        ui.heading(session.mode().title());
                        if status == ArcadeStatus::Playing && ui.button("Exit").clicked() {
                            actions.push(Action::ExitSession);
                        }
                    });
                    ui.label(format!("Score: {}   Streak: {}", session.score(), session.streak()));
                    if let Some(seconds) = engine.timer_remaining() {
                        ui.label(format!("⏱ {seconds}s"));
                    }
                    ui.separator();

                    match session.state() {
                        ArcadeState::Playing { prompt, .. } => {
                            if let Some(card) = session.current_card() {
                                render_prompt(ui, card, prompt, typed, actions);
                            }
                        }
                        ArcadeState::Finished(summary) => {
                            let headline = match summary.outcome {
                                ArcadeOutcome::Won if celebrating => "🎉 You won!",
                                ArcadeOutcome::Won => "You won!",
                                ArcadeOutcome::Lost => "The boss got you.",
                                ArcadeOutcome::TimedOut => "Time's up!",
                            };
                            ui.heading(headline);
                            ui.label(format!("Score: {}", summary.score));
                            ui.label(format!("Best streak: {}", summary.max_streak));
                            if ui.button("Back to Dashboard").clicked() {
                                actions.push(Action::BackToDashboard);
                            }
                        }
                    }
                }
            }
        });
    }
}

fn render_stage(
    ui: &mut egui::Ui,
    stage: &Stage,
    card: Option<&Card>,
    remaining: Option<u32>,
    typed: &mut String,
    actions: &mut Vec<Action>,
) {
    match stage {
        Stage::Intro(intro) => {
            let Some(card) = card else { return };
            ui.label("New word");
            ui.heading(card.front.as_str());
            if intro.step == IntroStep::Back {
                ui.label(format!("{}  =  {}", card.front, card.back));
            }
            if ui.button("Next").clicked() {
                actions.push(Action::AdvanceIntro);
            }
        }
        Stage::Match(board) => {
            ui.label("Match each word with its translation");
            ui.horizontal_wrapped(|ui| {
                for facet in &board.facets {
                    let selected = board.selected == Some(facet.id());
                    let tile = egui::SelectableLabel::new(selected, facet.text.as_str());
                    if ui.add_enabled(!facet.matched, tile).clicked() {
                        actions.push(Action::SelectFacet(facet.id()));
                    }
                }
            });
        }
        Stage::Quiz(quiz) => {
            let Some(card) = card else { return };
            ui.heading(card.front.as_str());
            for option in &quiz.options {
                if ui.button(option.back.as_str()).clicked() {
                    actions.push(Action::AnswerQuiz(option.id));
                }
            }
        }
        Stage::Typing(typing) => {
            let Some(card) = card else { return };
            ui.label(format!("Type the word you hear ({})", card.back));
            if ui.button("🔊 Repeat").clicked() {
                actions.push(Action::Repeat(card.front.clone()));
            }
            typing_field(ui, typed, Action::SubmitTyping, actions);
            if let Some(hint) = &typing.hint {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Answer: {hint}"));
            }
        }
        Stage::Think(think) => {
            let Some(card) = card else { return };
            ui.label(format!("Card {} of {}", think.index + 1, think.entries.len()));
            ui.heading(card.back.as_str());
            match think.phase {
                ThinkPhase::Pondering => {
                    if let Some(seconds) = remaining {
                        ui.label(format!("⏱ {seconds}s"));
                    }
                    if ui.button("Reveal").clicked() {
                        actions.push(Action::RevealThink);
                    }
                }
                ThinkPhase::Revealed { timed_out } => {
                    if timed_out {
                        ui.label("Time's up!");
                    }
                    ui.heading(card.front.as_str());
                    ui.horizontal(|ui| {
                        if ui.button("I knew it").clicked() {
                            actions.push(Action::VoteThink(true));
                        }
                        if ui.button("I missed it").clicked() {
                            actions.push(Action::VoteThink(false));
                        }
                    });
                }
            }
        }
        Stage::Results => {}
    }
}

fn render_prompt(
    ui: &mut egui::Ui,
    card: &Card,
    prompt: &Prompt,
    typed: &mut String,
    actions: &mut Vec<Action>,
) {
    match prompt {
        Prompt::Choice { options } => {
            ui.heading(card.front.as_str());
            ui.horizontal_wrapped(|ui| {
                for option in options {
                    if ui.button(option.back.as_str()).clicked() {
                        actions.push(Action::ChooseArcade(option.id));
                    }
                }
            });
        }
        Prompt::Masked { masked } => {
            ui.heading(masked.as_str());
            ui.label(card.back.as_str());
            typing_field(ui, typed, Action::SubmitArcadeTyping, actions);
        }
        Prompt::Listen => {
            if ui.button("🔊 Repeat").clicked() {
                actions.push(Action::Repeat(card.front.clone()));
            }
            typing_field(ui, typed, Action::SubmitArcadeTyping, actions);
        }
    }
}

fn typing_field(ui: &mut egui::Ui, typed: &mut String, submit: Action, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(typed);
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Check").clicked() || entered {
            actions.push(submit);
        }
    });
}
